//! Declarative YAML configuration
//!
//! ```yaml
//! tokenizer:
//!   policy:
//!     kind: noisy
//!     corruption_prob: 0.1
//! targets:
//!   num_bins: 10
//!   cache_capacity: 4096
//! folds:
//!   n_splits: 4
//!   seed: 1337
//! ensemble:
//!   kind: rank
//! ```

mod loader;
mod schema;
mod validate;


pub use loader::load_config;
pub use schema::{FoldConfig, ModerarConfig, TargetConfig};
pub use validate::ValidationError;
