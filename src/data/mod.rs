//! Training data preparation
//!
//! Index-level utilities used before tokenization:
//! - Seeded k-fold cross-validation splits
//! - Class-balanced bootstrap and fractional subsampling
//! - Whitespace cleaning of raw comments
//! - Language one-hot features

mod error;
mod kfold;
mod language;
mod sampling;

pub use error::{DataError, Result};
pub use kfold::{Fold, KFold, DEFAULT_NUM_FOLDS, DEFAULT_SEED};
pub use language::Language;
pub use sampling::{balanced_sample, sample_fraction};

/// Collapse whitespace runs into single spaces and trim the ends
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(clean_whitespace("  you\t are\n\n  wrong "), "you are wrong");
        assert_eq!(clean_whitespace(""), "");
        assert_eq!(clean_whitespace(" \r\n "), "");
    }
}
