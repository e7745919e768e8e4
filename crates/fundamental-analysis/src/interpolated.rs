use analysis_core::{FinancialMetricType, MetricEvaluation, MetricEvaluator, MetricStatus};

/// Card-display evaluator: the gauge shows where the value sits inside its band.
///
/// "Lower is better" families (PER, PBR, PEG, DEBT) treat the low breakpoint as
/// strict (`v < low` is good) and the high one as inclusive (`v <= high` is neutral).
/// "Higher is better" families mirror that (`v > high` good, `v >= low` neutral).
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpolatedEvaluator;

impl InterpolatedEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn evaluate_per(&self, v: f64) -> (MetricStatus, f64) {
        if v < 15.0 {
            (MetricStatus::Good, ((15.0 - v) / 15.0 * 100.0).min(100.0))
        } else if v <= 25.0 {
            (MetricStatus::Neutral, (v - 15.0) / 10.0 * 100.0)
        } else {
            (MetricStatus::Warning, ((v - 25.0) / 25.0 * 100.0).min(100.0))
        }
    }

    fn evaluate_pbr(&self, v: f64) -> (MetricStatus, f64) {
        if v < 1.0 {
            (MetricStatus::Good, (1.0 - v) * 100.0)
        } else if v <= 3.0 {
            (MetricStatus::Neutral, (v - 1.0) / 2.0 * 100.0)
        } else {
            (MetricStatus::Warning, ((v - 3.0) / 3.0 * 100.0).min(100.0))
        }
    }

    fn evaluate_peg(&self, v: f64) -> (MetricStatus, f64) {
        if v < 1.0 {
            (MetricStatus::Good, (1.0 - v) * 100.0)
        } else if v <= 2.0 {
            (MetricStatus::Neutral, (v - 1.0) * 100.0)
        } else {
            (MetricStatus::Warning, ((v - 2.0) / 2.0 * 100.0).min(100.0))
        }
    }

    fn evaluate_roe(&self, v: f64) -> (MetricStatus, f64) {
        if v > 0.15 {
            (MetricStatus::Good, ((v * 100.0 - 15.0) / 15.0 * 100.0).min(100.0))
        } else if v >= 0.10 {
            (MetricStatus::Neutral, (v - 0.10) / 0.05 * 100.0)
        } else {
            (MetricStatus::Bad, ((0.10 - v) / 0.10 * 100.0).max(0.0))
        }
    }

    fn evaluate_opm(&self, v: f64) -> (MetricStatus, f64) {
        if v > 0.20 {
            (MetricStatus::Good, ((v * 100.0 - 20.0) / 20.0 * 100.0).min(100.0))
        } else if v >= 0.10 {
            (MetricStatus::Neutral, (v - 0.10) / 0.10 * 100.0)
        } else {
            (MetricStatus::Bad, ((0.10 - v) / 0.10 * 100.0).max(0.0))
        }
    }

    fn evaluate_debt(&self, v: f64) -> (MetricStatus, f64) {
        if v < 0.50 {
            (MetricStatus::Good, (0.50 - v) / 0.50 * 100.0)
        } else if v <= 1.00 {
            (MetricStatus::Neutral, (v - 0.50) / 0.50 * 100.0)
        } else {
            (MetricStatus::Bad, ((v - 1.00) / 1.00 * 100.0).min(100.0))
        }
    }

    fn evaluate_current_ratio(&self, v: f64) -> (MetricStatus, f64) {
        if v > 2.0 {
            (MetricStatus::Good, ((v - 2.0) / 2.0 * 100.0).min(100.0))
        } else if v >= 1.0 {
            (MetricStatus::Neutral, (v - 1.0) * 100.0)
        } else {
            (MetricStatus::Bad, (1.0 - v) * 100.0)
        }
    }

    fn evaluate_dividend(&self, v: f64) -> (MetricStatus, f64) {
        if v > 0.03 {
            (MetricStatus::Good, ((v * 100.0 - 3.0) / 3.0 * 100.0).min(100.0))
        } else if v >= 0.01 {
            (MetricStatus::Neutral, (v - 0.01) / 0.02 * 100.0)
        } else {
            (MetricStatus::Bad, ((0.01 - v) / 0.01 * 100.0).max(0.0))
        }
    }

    fn evaluate_growth(&self, v: f64) -> (MetricStatus, f64) {
        if v > 0.10 {
            (MetricStatus::Good, ((v * 100.0 - 10.0) / 10.0 * 100.0).min(100.0))
        } else if v >= 0.0 {
            (MetricStatus::Neutral, v / 0.10 * 100.0)
        } else {
            (MetricStatus::Bad, (-v / 0.10 * 100.0).max(0.0))
        }
    }
}

impl MetricEvaluator for InterpolatedEvaluator {
    fn name(&self) -> &'static str {
        "interpolated"
    }

    fn evaluate(&self, metric: FinancialMetricType, value: Option<f64>) -> MetricEvaluation {
        let v = match value {
            Some(v) if v.is_finite() => v,
            _ => return MetricEvaluation::no_data(),
        };

        let (status, percent) = match metric {
            FinancialMetricType::Per | FinancialMetricType::PerForward => self.evaluate_per(v),
            FinancialMetricType::Pbr => self.evaluate_pbr(v),
            FinancialMetricType::Peg => self.evaluate_peg(v),
            FinancialMetricType::Roe => self.evaluate_roe(v),
            FinancialMetricType::Opm => self.evaluate_opm(v),
            FinancialMetricType::Debt => self.evaluate_debt(v),
            FinancialMetricType::CurrentRatio => self.evaluate_current_ratio(v),
            FinancialMetricType::Dividend => self.evaluate_dividend(v),
            FinancialMetricType::Growth => self.evaluate_growth(v),
        };

        // Final clamp applies to every band, including the unbounded ones
        MetricEvaluation::new(status, percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eval(metric: FinancialMetricType, v: f64) -> MetricEvaluation {
        InterpolatedEvaluator::new().evaluate(metric, Some(v))
    }

    #[test]
    fn test_none_is_neutral_zero_for_every_metric() {
        let evaluator = InterpolatedEvaluator::new();
        for metric in FinancialMetricType::ALL {
            assert_eq!(evaluator.evaluate(metric, None), MetricEvaluation::no_data());
            assert_eq!(evaluator.evaluate(metric, Some(f64::NAN)), MetricEvaluation::no_data());
        }
    }

    #[test]
    fn test_per_bands() {
        let e = eval(FinancialMetricType::Per, 10.0);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 100.0 / 3.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Per, 20.0);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Per, 37.5);
        assert_eq!(e.status, MetricStatus::Warning);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_per_boundaries() {
        // 15 is not strictly below 15: neutral at the bottom of the band
        let e = eval(FinancialMetricType::Per, 15.0);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_eq!(e.gauge_percent, 0.0);

        // 25 is still inside the inclusive neutral band
        let e = eval(FinancialMetricType::Per, 25.0);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 100.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Per, 25.01);
        assert_eq!(e.status, MetricStatus::Warning);
    }

    #[test]
    fn test_forward_per_shares_per_table() {
        for v in [3.0, 15.0, 22.0, 25.0, 48.0, 300.0] {
            assert_eq!(eval(FinancialMetricType::PerForward, v), eval(FinancialMetricType::Per, v));
        }
    }

    #[test]
    fn test_negative_per_clamped() {
        let e = eval(FinancialMetricType::Per, -8.0);
        assert_eq!(e.status, MetricStatus::Good);
        assert_eq!(e.gauge_percent, 100.0);
    }

    #[test]
    fn test_pbr_bands() {
        let e = eval(FinancialMetricType::Pbr, 0.6);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 40.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Pbr, 2.0);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Pbr, 4.5);
        assert_eq!(e.status, MetricStatus::Warning);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        // (1 - (-5)) * 100 = 600 before the final clamp
        let e = eval(FinancialMetricType::Pbr, -5.0);
        assert_eq!(e.status, MetricStatus::Good);
        assert_eq!(e.gauge_percent, 100.0);
    }

    #[test]
    fn test_roe_bands() {
        let e = eval(FinancialMetricType::Roe, 0.225);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Roe, 0.15);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 100.0, epsilon = 1e-6);

        let e = eval(FinancialMetricType::Roe, 0.12);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 40.0, epsilon = 1e-6);

        let e = eval(FinancialMetricType::Roe, 0.05);
        assert_eq!(e.status, MetricStatus::Bad);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Roe, -0.4);
        assert_eq!(e.status, MetricStatus::Bad);
        assert_eq!(e.gauge_percent, 100.0);
    }

    #[test]
    fn test_opm_bands() {
        let e = eval(FinancialMetricType::Opm, 0.30);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Opm, 0.15);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-6);

        let e = eval(FinancialMetricType::Opm, 0.02);
        assert_eq!(e.status, MetricStatus::Bad);
        assert_relative_eq!(e.gauge_percent, 80.0, epsilon = 1e-6);
    }

    #[test]
    fn test_debt_bands() {
        let e = eval(FinancialMetricType::Debt, 0.25);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Debt, 0.5);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_eq!(e.gauge_percent, 0.0);

        let e = eval(FinancialMetricType::Debt, 1.0);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 100.0, epsilon = 1e-9);

        let e = eval(FinancialMetricType::Debt, 1.5);
        assert_eq!(e.status, MetricStatus::Bad);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);

        assert_eq!(eval(FinancialMetricType::Debt, 9.0).gauge_percent, 100.0);
    }

    #[test]
    fn test_dividend_bands() {
        let e = eval(FinancialMetricType::Dividend, 0.045);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-6);

        let e = eval(FinancialMetricType::Dividend, 0.02);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-6);

        let e = eval(FinancialMetricType::Dividend, 0.0);
        assert_eq!(e.status, MetricStatus::Bad);
        assert_relative_eq!(e.gauge_percent, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_peg_current_ratio_growth() {
        let e = eval(FinancialMetricType::Peg, 0.8);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 20.0, epsilon = 1e-9);
        assert_eq!(eval(FinancialMetricType::Peg, 2.0).status, MetricStatus::Neutral);
        assert_eq!(eval(FinancialMetricType::Peg, 3.0).status, MetricStatus::Warning);

        let e = eval(FinancialMetricType::CurrentRatio, 3.0);
        assert_eq!(e.status, MetricStatus::Good);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);
        assert_eq!(eval(FinancialMetricType::CurrentRatio, 1.0).status, MetricStatus::Neutral);
        assert_eq!(eval(FinancialMetricType::CurrentRatio, 0.7).status, MetricStatus::Bad);

        let e = eval(FinancialMetricType::Growth, 0.05);
        assert_eq!(e.status, MetricStatus::Neutral);
        assert_relative_eq!(e.gauge_percent, 50.0, epsilon = 1e-9);
        assert_eq!(eval(FinancialMetricType::Growth, 0.25).status, MetricStatus::Good);
        assert_eq!(eval(FinancialMetricType::Growth, -0.05).status, MetricStatus::Bad);
    }

    #[test]
    fn test_gauge_always_in_range() {
        let extremes = [-1e9, -10000.0, -5.0, -0.5, 0.0, 0.0001, 0.5, 1.0, 15.0, 25.0, 1e4, 1e12];
        for metric in FinancialMetricType::ALL {
            for v in extremes {
                let e = eval(metric, v);
                assert!(
                    (0.0..=100.0).contains(&e.gauge_percent),
                    "{metric} {v} -> {}",
                    e.gauge_percent
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for metric in FinancialMetricType::ALL {
            let a = eval(metric, 0.137);
            let b = eval(metric, 0.137);
            assert_eq!(a.status, b.status);
            assert_eq!(a.gauge_percent.to_bits(), b.gauge_percent.to_bits());
        }
    }
}
