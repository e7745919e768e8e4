use analysis_core::IndicatorStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{classify, gauge_position, threshold_for};

/// Latest value of one macro indicator as returned by the economic API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IndicatorReading {
    pub fn assess(&self) -> IndicatorAssessment {
        IndicatorAssessment {
            symbol: self.symbol.clone(),
            value: self.value,
            status: classify(&self.symbol, self.value),
            gauge_position: gauge_position(&self.symbol, self.value),
            unit: threshold_for(&self.symbol).map(|t| t.unit),
            lower_is_better: threshold_for(&self.symbol).map(|t| t.reversed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorAssessment {
    pub symbol: String,
    pub value: Option<f64>,
    pub status: IndicatorStatus,
    pub gauge_position: Option<f64>,
    pub unit: Option<&'static str>,
    pub lower_is_better: Option<bool>,
}
