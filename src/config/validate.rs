//! Configuration validation

use super::schema::ModerarConfig;
use crate::ensemble::EnsembleStrategy;
use crate::tokenizer::MatchPolicy;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid corruption probability: {0} (must be in [0.0, 1.0])")]
    InvalidCorruptionProb(f64),

    #[error("Invalid max_input_chars_per_word: {0} (must be > 0)")]
    InvalidMaxChars(usize),

    #[error("Unknown token cannot be empty")]
    EmptyUnkToken,

    #[error("Invalid number of bins: {0} (must be > 0)")]
    InvalidNumBins(usize),

    #[error("Invalid target range: [{low}, {high}] (bounds must be finite with low < high)")]
    InvalidTargetRange { low: f64, high: f64 },

    #[error("Invalid cache capacity: {0} (must be > 0)")]
    InvalidCacheCapacity(usize),

    #[error("Invalid number of folds: {0} (must be >= 2)")]
    InvalidFolds(usize),

    #[error("Invalid ensemble power: {0} (must be > 0.0)")]
    InvalidPower(f64),
}

impl ModerarConfig {
    /// Check every section, reporting the first problem found
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tok = &self.tokenizer;
        if let MatchPolicy::Noisy { corruption_prob } = tok.policy {
            if !(0.0..=1.0).contains(&corruption_prob) {
                return Err(ValidationError::InvalidCorruptionProb(corruption_prob));
            }
        }
        if tok.max_input_chars_per_word == 0 {
            return Err(ValidationError::InvalidMaxChars(0));
        }
        if tok.unk_token.is_empty() {
            return Err(ValidationError::EmptyUnkToken);
        }

        let targets = &self.targets;
        if targets.num_bins == 0 {
            return Err(ValidationError::InvalidNumBins(0));
        }
        if !(targets.low.is_finite() && targets.high.is_finite() && targets.low < targets.high) {
            return Err(ValidationError::InvalidTargetRange {
                low: targets.low,
                high: targets.high,
            });
        }
        if targets.cache_capacity == Some(0) {
            return Err(ValidationError::InvalidCacheCapacity(0));
        }

        if self.folds.n_splits < 2 {
            return Err(ValidationError::InvalidFolds(self.folds.n_splits));
        }

        if let EnsembleStrategy::Power { power } = self.ensemble {
            if !(power.is_finite() && power > 0.0) {
                return Err(ValidationError::InvalidPower(power));
            }
        }
        Ok(())
    }
}
