//! K-Fold cross-validation splitter

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::{DataError, Result};

/// Default number of folds
pub const DEFAULT_NUM_FOLDS: usize = 4;

/// Default shuffle seed
pub const DEFAULT_SEED: u64 = 1337;

/// One fold: `(train indices, validation indices)`
pub type Fold = (Vec<usize>, Vec<usize>);

/// K-Fold cross-validation splitter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl Default for KFold {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_FOLDS)
    }
}

impl KFold {
    /// Create a new KFold splitter
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed: DEFAULT_SEED,
        }
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Number of folds
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Generate train/validation indices for each fold
    ///
    /// The first `n_samples % n_splits` folds get one extra validation
    /// sample. Every index lands in exactly one validation fold.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidFolds`] unless `2 <= n_splits <= n_samples`.
    pub fn split(&self, n_samples: usize) -> Result<Vec<Fold>> {
        if self.n_splits < 2 || self.n_splits > n_samples {
            return Err(DataError::InvalidFolds {
                n_splits: self.n_splits,
                n_samples,
            });
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            let mut rng = StdRng::seed_from_u64(self.seed);
            indices.shuffle(&mut rng);
        }

        let fold_size = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;

        for i in 0..self.n_splits {
            let extra = usize::from(i < remainder);
            let end = start + fold_size + extra;

            let val_indices: Vec<usize> = indices[start..end].to_vec();
            let train_indices: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[end..].iter())
                .copied()
                .collect();

            folds.push((train_indices, val_indices));
            start = end;
        }

        tracing::debug!(
            n_samples,
            n_splits = self.n_splits,
            shuffle = self.shuffle,
            seed = self.seed,
            "generated k-fold indices"
        );
        Ok(folds)
    }
}
