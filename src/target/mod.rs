//! Soft Target Module
//!
//! Turns a scalar soft label (for example the fraction of annotators who
//! flagged a comment) into a categorical target over equal-width bins by
//! discretizing a truncated normal centered on the label.
//!
//! # Example
//!
//! ```
//! use moderar::target::TargetCache;
//!
//! let cache = TargetCache::new();
//! let dist = cache.get(0.5, 4, 0.0, 1.0).unwrap();
//! assert_eq!(dist.centers, vec![0.125, 0.375, 0.625, 0.875]);
//! assert!(dist.probabilities[1] > dist.probabilities[0]);
//! ```

mod cache;
mod distribution;
mod error;
mod truncnorm;


pub use cache::{CacheStats, TargetCache};
pub use distribution::{target_distribution, TargetDistribution};
pub use error::{Result, TargetError};
pub use truncnorm::{log_ndtr, log_ndtr_diff, TruncatedNormal};
