use analysis_core::FinancialMetricType;
use serde::{Deserialize, Serialize};

/// Financial ratios for one ticker as delivered by the stock API.
///
/// A missing field and an explicit `null` both land as `None`, the single
/// "data not available" marker. Margin, yield, debt and growth figures are fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    #[serde(default, alias = "per")]
    pub trailing_pe: Option<f64>,
    #[serde(default)]
    pub forward_pe: Option<f64>,
    #[serde(default, alias = "price_to_book")]
    pub pbr: Option<f64>,
    #[serde(default, alias = "peg")]
    pub peg_ratio: Option<f64>,
    #[serde(default, alias = "return_on_equity")]
    pub roe: Option<f64>,
    #[serde(default, alias = "operating_margin")]
    pub opm: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    #[serde(default)]
    pub current_ratio: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub revenue_growth: Option<f64>,
}

impl FinancialSnapshot {
    pub fn value(&self, metric: FinancialMetricType) -> Option<f64> {
        match metric {
            FinancialMetricType::Per => self.trailing_pe,
            FinancialMetricType::PerForward => self.forward_pe,
            FinancialMetricType::Pbr => self.pbr,
            FinancialMetricType::Peg => self.peg_ratio,
            FinancialMetricType::Roe => self.roe,
            FinancialMetricType::Opm => self.opm,
            FinancialMetricType::Debt => self.debt_to_equity,
            FinancialMetricType::CurrentRatio => self.current_ratio,
            FinancialMetricType::Dividend => self.dividend_yield,
            FinancialMetricType::Growth => self.revenue_growth,
        }
    }
}
