//! Owned memoization cache for soft-target distributions.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::distribution::{target_distribution, TargetDistribution};
use super::error::Result;

/// Exact-bits key; `-0.0` and `0.0` share an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    mean: u64,
    num_bins: usize,
    low: u64,
    high: u64,
}

impl CacheKey {
    fn new(mean: f64, num_bins: usize, low: f64, high: f64) -> Self {
        Self {
            mean: (mean + 0.0).to_bits(),
            num_bins,
            low: (low + 0.0).to_bits(),
            high: (high + 0.0).to_bits(),
        }
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, Arc<TargetDistribution>>,
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// Thread-safe memo of [`target_distribution`] results
///
/// An unbounded cache (the default) keeps every distinct
/// `(mean, num_bins, low, high)` it has seen for the cache's lifetime, which
/// is only appropriate when the key set is small and fixed (for example
/// labels that are means of a few annotator votes). A bounded cache evicts
/// the oldest inserted entry first.
///
/// Distributions are computed outside the lock. When two threads miss on
/// the same key concurrently both compute it, the first insert wins and
/// both callers receive that entry.
#[derive(Debug, Default)]
pub struct TargetCache {
    state: Mutex<CacheState>,
    capacity: Option<usize>,
}

impl TargetCache {
    /// Unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` distributions
    pub fn bounded(capacity: usize) -> Self {
        Self {
            state: Mutex::default(),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of entries, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the distribution for these arguments, computing it on a miss
    ///
    /// # Errors
    /// Propagates [`target_distribution`] argument errors; invalid arguments
    /// are never cached.
    pub fn get(
        &self,
        mean: f64,
        num_bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Arc<TargetDistribution>> {
        let key = CacheKey::new(mean, num_bins, low, high);
        {
            let mut state = self.lock();
            let found = state.entries.get(&key).cloned();
            if let Some(found) = found {
                state.hits += 1;
                return Ok(found);
            }
        }

        let computed = Arc::new(target_distribution(mean, num_bins, low, high)?);

        let mut state = self.lock();
        let existing = state.entries.get(&key).cloned();
        if let Some(existing) = existing {
            // Another thread installed it while we computed
            state.hits += 1;
            return Ok(existing);
        }
        state.misses += 1;
        state.entries.insert(key, Arc::clone(&computed));
        state.order.push_back(key);
        tracing::debug!(mean, num_bins, low, high, "cached target distribution");

        if let Some(capacity) = self.capacity {
            while state.entries.len() > capacity {
                let Some(oldest) = state.order.pop_front() else {
                    break;
                };
                state.entries.remove(&oldest);
                state.evictions += 1;
            }
        }
        Ok(computed)
    }

    /// Distributions for a batch of means sharing the same binning
    ///
    /// # Errors
    /// Fails on the first invalid argument.
    pub fn get_batch(
        &self,
        means: &[f64],
        num_bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Vec<Arc<TargetDistribution>>> {
        means
            .iter()
            .map(|&mean| self.get(mean, num_bins, low, high))
            .collect()
    }

    /// Number of cached distributions
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Drop all entries; counters are kept
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    /// Snapshot of hit/miss/eviction counters
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            len: state.entries.len(),
        }
    }
}
