//! Ensembling error types.

use thiserror::Error;

/// Prediction ensembling errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnsembleError {
    #[error("No predictions to ensemble")]
    Empty,

    #[error("Length mismatch: {ids} ids vs {scores} scores")]
    LengthMismatch { ids: usize, scores: usize },

    #[error("Duplicate prediction id: {0}")]
    DuplicateId(String),

    #[error("Non-finite score for id '{0}'")]
    NonFinite(String),

    #[error("Prediction set {index} does not share the ids of the first set")]
    IdMismatch { index: usize },

    #[error("Invalid ensemble config: {0}")]
    InvalidConfig(String),
}

/// Result type for ensembling
pub type Result<T> = std::result::Result<T, EnsembleError>;
