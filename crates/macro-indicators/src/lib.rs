//! Macro Indicator Status
//!
//! Classifies economic indicators (VIX, treasury yields, crude oil, ...) into
//! good / caution / danger bands using compiled-in thresholds per symbol.

pub mod classifier;
pub mod models;
pub mod thresholds;

pub use classifier::{classify, classify_with, gauge_position};
pub use models::{IndicatorAssessment, IndicatorReading};
pub use thresholds::{registered_symbols, threshold_for, IndicatorThreshold, ThresholdRange};
