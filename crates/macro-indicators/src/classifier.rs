use analysis_core::{position_in_range, IndicatorStatus};

use crate::thresholds::{threshold_for, IndicatorThreshold};

/// Gauge padding on each side of the outermost threshold bounds
const GAUGE_LOW_PAD: f64 = 0.8;
const GAUGE_HIGH_PAD: f64 = 1.2;

/// Classify an indicator reading. Unknown symbols and absent values yield `None`.
pub fn classify(symbol: &str, value: Option<f64>) -> IndicatorStatus {
    let Some(threshold) = threshold_for(symbol) else {
        tracing::trace!(symbol, "no thresholds registered");
        return IndicatorStatus::None;
    };
    match value.filter(|v| v.is_finite()) {
        Some(v) => classify_with(threshold, v),
        None => IndicatorStatus::None,
    }
}

/// Band membership against one definition, tested good -> caution -> danger.
pub fn classify_with(threshold: &IndicatorThreshold, value: f64) -> IndicatorStatus {
    let lower_inclusive = threshold.reversed;
    if threshold.good.contains(value, lower_inclusive) {
        IndicatorStatus::Good
    } else if threshold.caution.contains(value, lower_inclusive) {
        IndicatorStatus::Caution
    } else if threshold.danger.contains(value, lower_inclusive) {
        IndicatorStatus::Danger
    } else {
        IndicatorStatus::None
    }
}

/// Marker position (0-100) for the indicator gauge.
///
/// The scale runs from 80% of the smallest bound to 120% of the largest.
/// Display only; never used for classification.
pub fn gauge_position(symbol: &str, value: Option<f64>) -> Option<f64> {
    let threshold = threshold_for(symbol)?;
    let v = value.filter(|v| v.is_finite())?;
    let (lo, hi) = threshold.bound_span()?;
    Some(position_in_range(v, lo * GAUGE_LOW_PAD, hi * GAUGE_HIGH_PAD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vix_bands() {
        assert_eq!(classify("^VIX", Some(15.0)), IndicatorStatus::Good);
        assert_eq!(classify("^VIX", Some(25.0)), IndicatorStatus::Caution);
        assert_eq!(classify("^VIX", Some(35.0)), IndicatorStatus::Danger);
    }

    #[test]
    fn test_shared_boundary_goes_to_more_severe_band() {
        assert_eq!(classify("^VIX", Some(20.0)), IndicatorStatus::Caution);
        assert_eq!(classify("^VIX", Some(30.0)), IndicatorStatus::Danger);
        assert_eq!(classify("^TNX", Some(5.0)), IndicatorStatus::Danger);

        // Higher-is-better copper: the lower edge is the severe side
        assert_eq!(classify("HG=F", Some(4.0)), IndicatorStatus::Caution);
        assert_eq!(classify("HG=F", Some(3.0)), IndicatorStatus::Danger);
        assert_eq!(classify("HG=F", Some(4.5)), IndicatorStatus::Good);
    }

    #[test]
    fn test_unknown_or_missing() {
        assert_eq!(classify("UNKNOWN_SYMBOL", Some(50.0)), IndicatorStatus::None);
        assert_eq!(classify("^VIX", None), IndicatorStatus::None);
        assert_eq!(classify("^VIX", Some(f64::NAN)), IndicatorStatus::None);
    }

    #[test]
    fn test_other_registered_symbols() {
        assert_eq!(classify("^IRX", Some(2.1)), IndicatorStatus::Good);
        assert_eq!(classify("CL=F", Some(92.0)), IndicatorStatus::Caution);
        assert_eq!(classify("DX-Y.NYB", Some(107.3)), IndicatorStatus::Danger);
    }

    #[test]
    fn test_gauge_position() {
        // VIX scale: 16 .. 36
        assert_relative_eq!(gauge_position("^VIX", Some(26.0)).unwrap(), 50.0, epsilon = 1e-9);
        assert_eq!(gauge_position("^VIX", Some(5.0)), Some(0.0));
        assert_eq!(gauge_position("^VIX", Some(80.0)), Some(100.0));
        assert_eq!(gauge_position("^VIX", None), None);
        assert_eq!(gauge_position("UNKNOWN_SYMBOL", Some(1.0)), None);
    }

    #[test]
    fn test_gauge_in_range_for_all_symbols() {
        for symbol in crate::registered_symbols() {
            for v in [-1e6, 0.0, 1.0, 4.2, 25.0, 99.0, 1e6] {
                let pos = gauge_position(symbol, Some(v)).unwrap();
                assert!((0.0..=100.0).contains(&pos), "{symbol} {v} -> {pos}");
            }
        }
    }
}
