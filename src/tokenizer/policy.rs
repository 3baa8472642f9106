//! Acceptance policy for vocabulary hits during the WordPiece scan.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a real vocabulary hit is rejected in noisy mode
pub const DEFAULT_CORRUPTION_PROB: f64 = 0.1;

/// Decides whether a candidate piece found in the vocabulary is accepted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Standard greedy longest-match; never draws randomness
    Exact,
    /// Reject each hit with probability `corruption_prob` (subword dropout)
    Noisy { corruption_prob: f64 },
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::noisy()
    }
}

impl MatchPolicy {
    /// Noisy policy with the default corruption probability
    pub fn noisy() -> Self {
        Self::Noisy {
            corruption_prob: DEFAULT_CORRUPTION_PROB,
        }
    }

    /// Accept a vocabulary hit.
    ///
    /// Noisy mode consumes exactly one `f64` draw per call and accepts only
    /// when the draw is strictly greater than the corruption probability,
    /// so a probability of 1.0 rejects everything.
    pub fn accepts<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match *self {
            Self::Exact => true,
            Self::Noisy { corruption_prob } => rng.random::<f64>() > corruption_prob,
        }
    }

    /// Corruption probability (0.0 for exact matching)
    pub fn corruption_prob(&self) -> f64 {
        match *self {
            Self::Exact => 0.0,
            Self::Noisy { corruption_prob } => corruption_prob,
        }
    }
}
