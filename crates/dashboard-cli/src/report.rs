use analysis_core::Locale;
use fundamental_analysis::{score_all, CategoryScore, FinancialSnapshot, TierLabel, TieredEvaluator};
use macro_indicators::{IndicatorAssessment, IndicatorReading};
use portfolio_manager::{
    format_currency, format_percent, format_profit, format_signed_currency, Currency, Holding, ProfitInfo, UnitProfit,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EvaluatorKind;

/// Everything the dashboard has fetched for one ticker
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSnapshot {
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub financials: FinancialSnapshot,
    #[serde(default)]
    pub holding: Option<Holding>,
    #[serde(default)]
    pub indicators: Vec<IndicatorReading>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub symbol: String,
    pub currency: Currency,
    pub evaluator: EvaluatorKind,
    pub current_price: Option<f64>,
    pub categories: Vec<CategoryScore>,
    pub indicators: Vec<IndicatorAssessment>,
    pub profit: Option<ProfitInfo>,
    pub unit_profit: Option<UnitProfit>,
}

impl DashboardReport {
    pub fn build(snapshot: &DashboardSnapshot, kind: EvaluatorKind) -> Self {
        let evaluator = kind.evaluator();
        let categories = score_all(evaluator.as_ref(), &snapshot.financials);
        let indicators: Vec<IndicatorAssessment> = snapshot.indicators.iter().map(|r| r.assess()).collect();

        let (profit, unit_profit) = match (&snapshot.holding, snapshot.current_price) {
            (Some(holding), Some(price)) => (holding.profit(price), holding.unit_profit(price)),
            _ => (None, None),
        };

        tracing::debug!(
            symbol = %snapshot.symbol,
            evaluator = evaluator.name(),
            indicators = indicators.len(),
            has_profit = profit.is_some(),
            "Built dashboard report"
        );

        Self {
            symbol: snapshot.symbol.clone(),
            currency: Currency::for_symbol(&snapshot.symbol),
            evaluator: kind,
            current_price: snapshot.current_price,
            categories,
            indicators,
            profit,
            unit_profit,
        }
    }

    fn tier_label(&self, score: &fundamental_analysis::MetricScore) -> Option<TierLabel> {
        match self.evaluator {
            EvaluatorKind::Tiered => TieredEvaluator::new().assess(score.metric, score.value).map(|t| t.label),
            EvaluatorKind::Interpolated => None,
        }
    }

    pub fn render(&self, locale: Locale) -> String {
        self.localized(locale).to_string()
    }

    pub fn localized(&self, locale: Locale) -> LocalizedReport<'_> {
        LocalizedReport { report: self, locale }
    }
}

/// Text rendering of a report in one locale
pub struct LocalizedReport<'a> {
    report: &'a DashboardReport,
    locale: Locale,
}

impl fmt::Display for LocalizedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let locale = self.locale;
        let no_data = match locale {
            Locale::Ko => "데이터 없음",
            Locale::En => "n/a",
        };

        let price = report
            .current_price
            .map(|p| format_currency(p, report.currency))
            .unwrap_or_else(|| no_data.to_string());
        writeln!(f, "{} {}", report.symbol, price)?;

        for category in &report.categories {
            let average = category
                .average_gauge
                .map(|g| format!("{g:.1}"))
                .unwrap_or_else(|| no_data.to_string());
            writeln!(f, "\n[{}] {}", category.category.label(locale), average)?;

            for score in &category.metrics {
                let name = score.metric.label(locale);
                if !score.has_data() {
                    writeln!(f, "  {name:<16} {no_data}")?;
                    continue;
                }
                let value = score.value.unwrap_or_default();
                let shown = if score.metric.is_fractional() {
                    format!("{:.2}%", value * 100.0)
                } else {
                    format!("{value:.2}")
                };
                let label = report
                    .tier_label(score)
                    .map(|t| t.label(locale))
                    .unwrap_or_else(|| score.evaluation.status.label(locale));
                writeln!(
                    f,
                    "  {name:<16} {shown:>10}  {label:<8} {:>5.1}",
                    score.evaluation.gauge_percent
                )?;
            }
        }

        if !report.indicators.is_empty() {
            let header = match locale {
                Locale::Ko => "경제 지표",
                Locale::En => "Macro Indicators",
            };
            writeln!(f, "\n[{header}]")?;
            for indicator in &report.indicators {
                let value = indicator
                    .value
                    .map(|v| format!("{v:.2}{}", indicator.unit.unwrap_or("")))
                    .unwrap_or_else(|| no_data.to_string());
                let gauge = indicator
                    .gauge_position
                    .map(|g| format!("{g:.1}"))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    f,
                    "  {:<10} {value:>10}  {:<8} {gauge:>5}",
                    indicator.symbol,
                    indicator.status.label(locale)
                )?;
            }
        }

        let header = match locale {
            Locale::Ko => "수익률",
            Locale::En => "Position",
        };
        writeln!(f, "\n[{header}]")?;
        match (&report.profit, &report.unit_profit) {
            (Some(info), _) => {
                writeln!(f, "  {}", format_profit(info, report.currency))?;
                writeln!(
                    f,
                    "  {} -> {}",
                    format_currency(info.total_purchase_amount, report.currency),
                    format_currency(info.total_current_amount, report.currency)
                )?;
            }
            (None, Some(unit)) => {
                writeln!(
                    f,
                    "  {} ({})",
                    format_signed_currency(unit.profit, report.currency),
                    format_percent(unit.profit_percent)
                )?;
            }
            (None, None) => {
                let msg = match locale {
                    Locale::Ko => "매입가 미입력",
                    Locale::En => "No purchase price set",
                };
                writeln!(f, "  {msg}")?;
            }
        }

        Ok(())
    }
}
