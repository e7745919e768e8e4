use analysis_core::{FinancialMetricType, Locale, MetricEvaluation, MetricEvaluator};
use serde::{Deserialize, Serialize};

use crate::FinancialSnapshot;

/// Grouping used by the category grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Valuation,
    Profitability,
    Stability,
    Growth,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 4] = [
        MetricCategory::Valuation,
        MetricCategory::Profitability,
        MetricCategory::Stability,
        MetricCategory::Growth,
    ];

    pub fn metrics(&self) -> &'static [FinancialMetricType] {
        match self {
            MetricCategory::Valuation => &[
                FinancialMetricType::Per,
                FinancialMetricType::PerForward,
                FinancialMetricType::Pbr,
                FinancialMetricType::Peg,
            ],
            MetricCategory::Profitability => &[FinancialMetricType::Roe, FinancialMetricType::Opm],
            MetricCategory::Stability => &[FinancialMetricType::Debt, FinancialMetricType::CurrentRatio],
            MetricCategory::Growth => &[FinancialMetricType::Growth, FinancialMetricType::Dividend],
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MetricCategory::Valuation, Locale::Ko) => "가치평가",
            (MetricCategory::Profitability, Locale::Ko) => "수익성",
            (MetricCategory::Stability, Locale::Ko) => "안정성",
            (MetricCategory::Growth, Locale::Ko) => "성장성",
            (MetricCategory::Valuation, Locale::En) => "Valuation",
            (MetricCategory::Profitability, Locale::En) => "Profitability",
            (MetricCategory::Stability, Locale::En) => "Stability",
            (MetricCategory::Growth, Locale::En) => "Growth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: FinancialMetricType,
    /// Raw ratio; `None` means the evaluation is the no-data placeholder
    pub value: Option<f64>,
    pub evaluation: MetricEvaluation,
}

impl MetricScore {
    pub fn has_data(&self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: MetricCategory,
    pub metrics: Vec<MetricScore>,
    /// Mean gauge over metrics with data; `None` when nothing was available
    pub average_gauge: Option<f64>,
}

/// Evaluate every metric of one category against a snapshot.
pub fn score_category<E>(evaluator: &E, snapshot: &FinancialSnapshot, category: MetricCategory) -> CategoryScore
where
    E: MetricEvaluator + ?Sized,
{
    let metrics: Vec<MetricScore> = category
        .metrics()
        .iter()
        .map(|&metric| {
            let value = snapshot.value(metric);
            MetricScore {
                metric,
                value,
                evaluation: evaluator.evaluate(metric, value),
            }
        })
        .collect();

    let with_data: Vec<f64> = metrics
        .iter()
        .filter(|m| m.has_data())
        .map(|m| m.evaluation.gauge_percent)
        .collect();

    let average_gauge = if with_data.is_empty() {
        tracing::trace!(category = ?category, evaluator = evaluator.name(), "no data for category");
        None
    } else {
        Some(with_data.iter().sum::<f64>() / with_data.len() as f64)
    };

    CategoryScore {
        category,
        metrics,
        average_gauge,
    }
}

/// Score all four categories in display order.
pub fn score_all<E>(evaluator: &E, snapshot: &FinancialSnapshot) -> Vec<CategoryScore>
where
    E: MetricEvaluator + ?Sized,
{
    MetricCategory::ALL
        .iter()
        .map(|&category| score_category(evaluator, snapshot, category))
        .collect()
}
