//! Data preparation error types.

use thiserror::Error;

/// Data preparation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Invalid number of folds: {n_splits} for {n_samples} samples (need 2 <= folds <= samples)")]
    InvalidFolds { n_splits: usize, n_samples: usize },

    #[error("Cannot draw balanced sample: no {0} examples")]
    EmptyClass(&'static str),

    #[error("Invalid sample fraction: {0} (must be finite and > 0)")]
    InvalidFraction(f64),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}

/// Result type for data preparation
pub type Result<T> = std::result::Result<T, DataError>;
