use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Unknown metric type: {0}")]
    UnknownMetric(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid percent string: {0}")]
    InvalidPercent(String),
}
