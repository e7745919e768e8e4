//! Numeric helpers shared by the evaluators and display formatting.

/// Clamp a gauge value to `[0, 100]`. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Position of `value` inside `[low, high]` as 0-100, clamped.
/// A degenerate span places the value in the middle.
pub fn position_in_range(value: f64, low: f64, high: f64) -> f64 {
    let span = high - low;
    if span.abs() < f64::EPSILON {
        return 50.0;
    }
    clamp_percent((value - low) / span * 100.0)
}
