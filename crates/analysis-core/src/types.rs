use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AnalysisError;

/// Financial ratio families, each with its own threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialMetricType {
    Per,
    PerForward,
    Pbr,
    Peg,
    Roe,
    Opm,
    Debt,
    CurrentRatio,
    Dividend,
    Growth,
}

impl FinancialMetricType {
    pub const ALL: [FinancialMetricType; 10] = [
        FinancialMetricType::Per,
        FinancialMetricType::PerForward,
        FinancialMetricType::Pbr,
        FinancialMetricType::Peg,
        FinancialMetricType::Roe,
        FinancialMetricType::Opm,
        FinancialMetricType::Debt,
        FinancialMetricType::CurrentRatio,
        FinancialMetricType::Dividend,
        FinancialMetricType::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialMetricType::Per => "PER",
            FinancialMetricType::PerForward => "PER_FORWARD",
            FinancialMetricType::Pbr => "PBR",
            FinancialMetricType::Peg => "PEG",
            FinancialMetricType::Roe => "ROE",
            FinancialMetricType::Opm => "OPM",
            FinancialMetricType::Debt => "DEBT",
            FinancialMetricType::CurrentRatio => "CURRENT_RATIO",
            FinancialMetricType::Dividend => "DIVIDEND",
            FinancialMetricType::Growth => "GROWTH",
        }
    }

    /// Display name for report headers
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FinancialMetricType::Per, Locale::Ko) => "PER",
            (FinancialMetricType::Per, Locale::En) => "P/E",
            (FinancialMetricType::PerForward, Locale::Ko) => "선행 PER",
            (FinancialMetricType::PerForward, Locale::En) => "Forward P/E",
            (FinancialMetricType::Pbr, Locale::Ko) => "PBR",
            (FinancialMetricType::Pbr, Locale::En) => "P/B",
            (FinancialMetricType::Peg, _) => "PEG",
            (FinancialMetricType::Roe, _) => "ROE",
            (FinancialMetricType::Opm, Locale::Ko) => "영업이익률",
            (FinancialMetricType::Opm, Locale::En) => "Operating Margin",
            (FinancialMetricType::Debt, Locale::Ko) => "부채비율",
            (FinancialMetricType::Debt, Locale::En) => "Debt Ratio",
            (FinancialMetricType::CurrentRatio, Locale::Ko) => "유동비율",
            (FinancialMetricType::CurrentRatio, Locale::En) => "Current Ratio",
            (FinancialMetricType::Dividend, Locale::Ko) => "배당수익률",
            (FinancialMetricType::Dividend, Locale::En) => "Dividend Yield",
            (FinancialMetricType::Growth, Locale::Ko) => "매출성장률",
            (FinancialMetricType::Growth, Locale::En) => "Revenue Growth",
        }
    }

    /// Ratios supplied as fractions (0.15 = 15%) rather than multiples
    pub fn is_fractional(&self) -> bool {
        matches!(
            self,
            FinancialMetricType::Roe
                | FinancialMetricType::Opm
                | FinancialMetricType::Debt
                | FinancialMetricType::Dividend
                | FinancialMetricType::Growth
        )
    }
}

impl fmt::Display for FinancialMetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancialMetricType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        FinancialMetricType::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| AnalysisError::UnknownMetric(s.to_string()))
    }
}

/// Qualitative bucket for a financial metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Neutral,
    Warning,
    Bad,
}

impl MetricStatus {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MetricStatus::Good, Locale::Ko) => "양호",
            (MetricStatus::Neutral, Locale::Ko) => "보통",
            (MetricStatus::Warning, Locale::Ko) => "주의",
            (MetricStatus::Bad, Locale::Ko) => "위험",
            (MetricStatus::Good, Locale::En) => "Good",
            (MetricStatus::Neutral, Locale::En) => "Neutral",
            (MetricStatus::Warning, Locale::En) => "Warning",
            (MetricStatus::Bad, Locale::En) => "Bad",
        }
    }
}

/// Result of evaluating one metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricEvaluation {
    pub status: MetricStatus,
    /// 0-100 position for the gauge bar
    pub gauge_percent: f64,
}

impl MetricEvaluation {
    pub fn new(status: MetricStatus, gauge_percent: f64) -> Self {
        Self {
            status,
            gauge_percent: crate::clamp_percent(gauge_percent),
        }
    }

    /// Result reported when the ratio is unavailable.
    /// Indistinguishable from a real neutral reading; callers check the raw value.
    pub fn no_data() -> Self {
        Self {
            status: MetricStatus::Neutral,
            gauge_percent: 0.0,
        }
    }
}

/// Macro indicator classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Good,
    Caution,
    Danger,
    None,
}

impl IndicatorStatus {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (IndicatorStatus::Good, Locale::Ko) => "양호",
            (IndicatorStatus::Caution, Locale::Ko) => "주의",
            (IndicatorStatus::Danger, Locale::Ko) => "위험",
            (IndicatorStatus::None, Locale::Ko) => "-",
            (IndicatorStatus::Good, Locale::En) => "Good",
            (IndicatorStatus::Caution, Locale::En) => "Caution",
            (IndicatorStatus::Danger, Locale::En) => "Danger",
            (IndicatorStatus::None, Locale::En) => "-",
        }
    }
}

/// Language for display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl FromStr for Locale {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Locale::Ko),
            "en" | "english" => Ok(Locale::En),
            _ => Err(AnalysisError::UnknownLocale(s.to_string())),
        }
    }
}
