use serde::Serialize;

/// Numeric band for one status; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ThresholdRange {
    pub const fn below(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub const fn above(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Half-open membership test. `lower_inclusive` selects `[min, max)`,
    /// otherwise `(min, max]`.
    pub fn contains(&self, value: f64, lower_inclusive: bool) -> bool {
        let above_min = match self.min {
            Some(min) if lower_inclusive => value >= min,
            Some(min) => value > min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) if lower_inclusive => value < max,
            Some(max) => value <= max,
            None => true,
        };
        above_min && below_max
    }

    fn bounds(&self) -> impl Iterator<Item = f64> {
        self.min.into_iter().chain(self.max)
    }
}

/// Threshold definition for one indicator symbol.
///
/// `reversed` marks indicators where lower readings are better. Those use
/// `[min, max)` ranges, the others `(min, max]`, so a value sitting exactly on a
/// shared boundary falls into the more severe band either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorThreshold {
    pub good: ThresholdRange,
    pub caution: ThresholdRange,
    pub danger: ThresholdRange,
    pub unit: &'static str,
    pub reversed: bool,
}

impl IndicatorThreshold {
    /// Smallest and largest finite bound across all three bands
    pub fn bound_span(&self) -> Option<(f64, f64)> {
        let bounds = self
            .good
            .bounds()
            .chain(self.caution.bounds())
            .chain(self.danger.bounds());
        bounds.fold(None, |acc, b| match acc {
            None => Some((b, b)),
            Some((lo, hi)) => Some((lo.min(b), hi.max(b))),
        })
    }
}

const THRESHOLDS: &[(&str, IndicatorThreshold)] = &[
    (
        "^VIX",
        IndicatorThreshold {
            good: ThresholdRange::below(20.0),
            caution: ThresholdRange::between(20.0, 30.0),
            danger: ThresholdRange::above(30.0),
            unit: "",
            reversed: true,
        },
    ),
    (
        "^TNX",
        IndicatorThreshold {
            good: ThresholdRange::below(4.0),
            caution: ThresholdRange::between(4.0, 5.0),
            danger: ThresholdRange::above(5.0),
            unit: "%",
            reversed: true,
        },
    ),
    (
        "^IRX",
        IndicatorThreshold {
            good: ThresholdRange::below(3.0),
            caution: ThresholdRange::between(3.0, 5.0),
            danger: ThresholdRange::above(5.0),
            unit: "%",
            reversed: true,
        },
    ),
    (
        "CL=F",
        IndicatorThreshold {
            good: ThresholdRange::below(80.0),
            caution: ThresholdRange::between(80.0, 100.0),
            danger: ThresholdRange::above(100.0),
            unit: "$",
            reversed: true,
        },
    ),
    (
        "DX-Y.NYB",
        IndicatorThreshold {
            good: ThresholdRange::below(100.0),
            caution: ThresholdRange::between(100.0, 105.0),
            danger: ThresholdRange::above(105.0),
            unit: "",
            reversed: true,
        },
    ),
    // Copper tracks industrial demand: higher is healthier
    (
        "HG=F",
        IndicatorThreshold {
            good: ThresholdRange::above(4.0),
            caution: ThresholdRange::between(3.0, 4.0),
            danger: ThresholdRange::below(3.0),
            unit: "$",
            reversed: false,
        },
    ),
];

/// Threshold definition for a symbol, if one is registered.
pub fn threshold_for(symbol: &str) -> Option<&'static IndicatorThreshold> {
    THRESHOLDS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(symbol.trim()))
        .map(|(_, t)| t)
}

pub fn registered_symbols() -> impl Iterator<Item = &'static str> {
    THRESHOLDS.iter().map(|(s, _)| *s)
}
