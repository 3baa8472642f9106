//! Ensemble averaging strategy enum

use serde::{Deserialize, Serialize};

/// Strategy for combining per-model toxicity scores
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnsembleStrategy {
    /// Arithmetic mean of scores
    #[default]
    Mean,

    /// Mean of `score^power`; the root is not taken, which keeps ordering
    /// for `power > 0`
    Power { power: f64 },

    /// Mean of each model's average ranks divided by the number of rows
    Rank,
}

impl EnsembleStrategy {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Power { .. } => "power",
            Self::Rank => "rank",
        }
    }
}
