//! Soft-target error types.

use thiserror::Error;

/// Soft-target generation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for soft-target operations
pub type Result<T> = std::result::Result<T, TargetError>;
