//! Tokenizer error types.

use thiserror::Error;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Duplicate vocabulary entry '{token}' at line {line}")]
    DuplicateToken { token: String, line: usize },

    #[error("Vocabulary too large: {0} entries")]
    VocabTooLarge(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
