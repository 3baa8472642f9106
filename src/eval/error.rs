//! Evaluation error types.

use thiserror::Error;

/// Evaluation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Cannot score empty predictions")]
    Empty,

    #[error("Length mismatch: {labels} labels vs {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },

    #[error("ROC AUC is undefined when only one class is present")]
    SingleClass,

    #[error("Non-finite score at position {0}")]
    NonFinite(usize),

    #[error("Target for id '{id}' is {value}, expected 0 or 1")]
    NonBinaryTarget { id: String, value: f64 },

    #[error("Prediction ids do not match target ids")]
    IdMismatch,
}

/// Result type for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
