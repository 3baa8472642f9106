//! Crate-level error type

use thiserror::Error;

use crate::config::ValidationError;
use crate::data::DataError;
use crate::ensemble::EnsembleError;
use crate::eval::EvalError;
use crate::target::TargetError;
use crate::tokenizer::TokenizerError;

/// Errors from any moderar stage
#[derive(Debug, Error)]
pub enum Error {
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Target error: {0}")]
    Target(#[from] TargetError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Ensemble error: {0}")]
    Ensemble(#[from] EnsembleError),

    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for moderar operations
pub type Result<T> = std::result::Result<T, Error>;
