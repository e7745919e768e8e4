use analysis_core::{FinancialMetricType, Locale, MetricEvaluation, MetricEvaluator, MetricStatus};
use serde::{Deserialize, Serialize};

/// Qualitative label attached to a fixed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierLabel {
    Undervalued,
    Fair,
    SomewhatHigh,
    Overvalued,
    Excellent,
    Good,
    Average,
    Weak,
    Safe,
    Risky,
    HighGrowth,
    Growing,
    Modest,
    Declining,
}

impl TierLabel {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => match self {
                TierLabel::Undervalued => "저평가",
                TierLabel::Fair => "적정",
                TierLabel::SomewhatHigh => "다소 높음",
                TierLabel::Overvalued => "고평가",
                TierLabel::Excellent => "매우 우수",
                TierLabel::Good => "우수",
                TierLabel::Average => "보통",
                TierLabel::Weak => "미흡",
                TierLabel::Safe => "안정",
                TierLabel::Risky => "위험",
                TierLabel::HighGrowth => "고성장",
                TierLabel::Growing => "성장",
                TierLabel::Modest => "정체",
                TierLabel::Declining => "역성장",
            },
            Locale::En => match self {
                TierLabel::Undervalued => "Undervalued",
                TierLabel::Fair => "Fair",
                TierLabel::SomewhatHigh => "Somewhat High",
                TierLabel::Overvalued => "Overvalued",
                TierLabel::Excellent => "Excellent",
                TierLabel::Good => "Good",
                TierLabel::Average => "Average",
                TierLabel::Weak => "Weak",
                TierLabel::Safe => "Safe",
                TierLabel::Risky => "Risky",
                TierLabel::HighGrowth => "High Growth",
                TierLabel::Growing => "Growing",
                TierLabel::Modest => "Modest",
                TierLabel::Declining => "Declining",
            },
        }
    }
}

/// One of four fixed tiers (30/50/70/90) for the category grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierAssessment {
    pub tier_percent: f64,
    pub label: TierLabel,
    pub status: MetricStatus,
}

impl TierAssessment {
    fn new(tier_percent: f64, label: TierLabel, status: MetricStatus) -> Self {
        Self { tier_percent, label, status }
    }
}

/// Category-grid evaluator with fixed tier percentages
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredEvaluator;

impl TieredEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Tier for a metric value; `None` when the value is absent or not finite.
    pub fn assess(&self, metric: FinancialMetricType, value: Option<f64>) -> Option<TierAssessment> {
        let v = value.filter(|v| v.is_finite())?;

        let valuation = [
            TierLabel::Undervalued,
            TierLabel::Fair,
            TierLabel::SomewhatHigh,
            TierLabel::Overvalued,
        ];
        let quality = [TierLabel::Excellent, TierLabel::Good, TierLabel::Average, TierLabel::Weak];

        let assessment = match metric {
            FinancialMetricType::Per | FinancialMetricType::PerForward => {
                lower_is_better(v, [15.0, 25.0, 35.0], valuation)
            }
            FinancialMetricType::Pbr => lower_is_better(v, [1.0, 2.0, 3.0], valuation),
            FinancialMetricType::Peg => lower_is_better(v, [1.0, 1.5, 2.0], valuation),
            FinancialMetricType::Debt => lower_is_better(
                v,
                [0.5, 1.0, 2.0],
                [TierLabel::Safe, TierLabel::Average, TierLabel::SomewhatHigh, TierLabel::Risky],
            ),
            FinancialMetricType::Roe => higher_is_better(v, [0.10, 0.15, 0.20], quality),
            FinancialMetricType::Opm => higher_is_better(v, [0.05, 0.10, 0.20], quality),
            FinancialMetricType::CurrentRatio => higher_is_better(v, [1.0, 1.5, 2.0], quality),
            FinancialMetricType::Dividend => higher_is_better(v, [0.01, 0.02, 0.04], quality),
            FinancialMetricType::Growth => higher_is_better(
                v,
                [0.0, 0.10, 0.20],
                [TierLabel::HighGrowth, TierLabel::Growing, TierLabel::Modest, TierLabel::Declining],
            ),
        };

        Some(assessment)
    }
}

/// Risk rises with the value: 30 below the first cut, 90 at or above the last.
fn lower_is_better(v: f64, cuts: [f64; 3], labels: [TierLabel; 4]) -> TierAssessment {
    if v < cuts[0] {
        TierAssessment::new(30.0, labels[0], MetricStatus::Good)
    } else if v < cuts[1] {
        TierAssessment::new(50.0, labels[1], MetricStatus::Neutral)
    } else if v < cuts[2] {
        TierAssessment::new(70.0, labels[2], MetricStatus::Warning)
    } else {
        TierAssessment::new(90.0, labels[3], MetricStatus::Bad)
    }
}

/// Strength rises with the value: 90 at or above the last cut, 30 below the first.
/// `labels` runs from the strongest tier to the weakest.
fn higher_is_better(v: f64, cuts: [f64; 3], labels: [TierLabel; 4]) -> TierAssessment {
    if v >= cuts[2] {
        TierAssessment::new(90.0, labels[0], MetricStatus::Good)
    } else if v >= cuts[1] {
        TierAssessment::new(70.0, labels[1], MetricStatus::Good)
    } else if v >= cuts[0] {
        TierAssessment::new(50.0, labels[2], MetricStatus::Neutral)
    } else {
        TierAssessment::new(30.0, labels[3], MetricStatus::Bad)
    }
}

impl MetricEvaluator for TieredEvaluator {
    fn name(&self) -> &'static str {
        "tiered"
    }

    fn evaluate(&self, metric: FinancialMetricType, value: Option<f64>) -> MetricEvaluation {
        match self.assess(metric, value) {
            Some(tier) => MetricEvaluation::new(tier.status, tier.tier_percent),
            None => MetricEvaluation::no_data(),
        }
    }
}
