//! Financial metric evaluation
//!
//! Two strategies turn a raw ratio into a status bucket and gauge percent:
//! the interpolated evaluator (card display) places the value inside its band,
//! the tiered evaluator (category grid) snaps it to one of four fixed tiers.
//! The two give different results for the same input.

pub mod category;
pub mod interpolated;
pub mod snapshot;
pub mod tiered;

pub use category::{score_all, score_category, CategoryScore, MetricCategory, MetricScore};
pub use interpolated::InterpolatedEvaluator;
pub use snapshot::FinancialSnapshot;
pub use tiered::{TierAssessment, TierLabel, TieredEvaluator};
