use crate::{FinancialMetricType, MetricEvaluation};

/// Maps a raw financial ratio to a status bucket and gauge percent.
///
/// Implementations are pure: identical inputs always produce identical outputs.
/// `None` and non-finite values must yield [`MetricEvaluation::no_data`].
pub trait MetricEvaluator: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    fn evaluate(&self, metric: FinancialMetricType, value: Option<f64>) -> MetricEvaluation;
}
