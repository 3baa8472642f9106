//! # moderar
//!
//! Preprocessing and postprocessing for multilingual toxic comment
//! classification:
//!
//! - [`tokenizer`]: WordPiece with stochastic subword corruption
//! - [`target`]: soft labels binned from a truncated normal, with caching
//! - [`data`]: k-fold splits, class-balanced sampling, language features
//! - [`eval`]: ROC AUC scoring
//! - [`ensemble`]: mean, power and rank averaging of model predictions
//! - [`config`]: YAML configuration for all of the above
//!
//! ## Example
//!
//! ```
//! use std::collections::HashSet;
//! use moderar::tokenizer::{NoisyWordpieceTokenizer, WordpieceConfig};
//! use moderar::target::TargetCache;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let vocab: HashSet<String> = ["un", "##able"].iter().map(|s| s.to_string()).collect();
//! let tokenizer = NoisyWordpieceTokenizer::new(vocab, WordpieceConfig::exact());
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(tokenizer.tokenize("unable", &mut rng), ["un", "##able"]);
//!
//! let cache = TargetCache::new();
//! let dist = cache.get(0.5, 4, 0.0, 1.0)?;
//! assert_eq!(dist.num_bins(), 4);
//! # Ok::<(), moderar::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod ensemble;
pub mod error;
pub mod eval;
pub mod target;
pub mod tokenizer;

pub use config::{load_config, ModerarConfig};
pub use ensemble::{ensemble, EnsembleStrategy, Predictions};
pub use error::{Error, Result};
pub use target::{target_distribution, TargetCache, TargetDistribution};
pub use tokenizer::{MatchPolicy, NoisyWordpieceTokenizer, Vocab, WordpieceConfig};
