//! Configuration schema
//!
//! Serde structs for the YAML pipeline configuration. Every section has
//! defaults, so an empty document is a valid config.

use serde::{Deserialize, Serialize};

use crate::data::{KFold, DEFAULT_NUM_FOLDS, DEFAULT_SEED};
use crate::ensemble::EnsembleStrategy;
use crate::target::TargetCache;
use crate::tokenizer::WordpieceConfig;

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerarConfig {
    /// Noisy WordPiece settings
    pub tokenizer: WordpieceConfig,
    /// Soft target binning
    pub targets: TargetConfig,
    /// Cross-validation folds
    pub folds: FoldConfig,
    /// Prediction ensembling
    pub ensemble: EnsembleStrategy,
}

/// Soft target binning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub num_bins: usize,
    pub low: f64,
    pub high: f64,
    /// Maximum cached distributions; unbounded when absent
    pub cache_capacity: Option<usize>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            num_bins: 10,
            low: 0.0,
            high: 1.0,
            cache_capacity: None,
        }
    }
}

impl TargetConfig {
    /// Create a cache honoring `cache_capacity`
    pub fn build_cache(&self) -> TargetCache {
        match self.cache_capacity {
            Some(capacity) => TargetCache::bounded(capacity),
            None => TargetCache::new(),
        }
    }
}

/// Cross-validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    pub n_splits: usize,
    pub seed: u64,
    pub shuffle: bool,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            n_splits: DEFAULT_NUM_FOLDS,
            seed: DEFAULT_SEED,
            shuffle: true,
        }
    }
}

impl FoldConfig {
    /// Build the splitter described by this config
    pub fn kfold(&self) -> KFold {
        let kfold = KFold::new(self.n_splits).with_seed(self.seed);
        if self.shuffle {
            kfold
        } else {
            kfold.without_shuffle()
        }
    }
}
