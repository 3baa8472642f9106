//! Subword Tokenization Module
//!
//! WordPiece tokenization with subword-dropout noise for training pipelines.
//! A real vocabulary hit is rejected with a fixed probability, so the model
//! sees alternate, suboptimal segmentations of the same text.
//!
//! # Example
//!
//! ```
//! use moderar::tokenizer::{NoisyWordpieceTokenizer, Vocab, WordpieceConfig};
//! use rand::SeedableRng;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let vocab = Vocab::from_tokens(["[UNK]", "un", "##able"])?;
//!     let tokenizer = NoisyWordpieceTokenizer::new(vocab, WordpieceConfig::exact());
//!
//!     let mut rng = rand::rngs::StdRng::seed_from_u64(1337);
//!     let tokens = tokenizer.tokenize("unable", &mut rng);
//!     assert_eq!(tokens, vec!["un", "##able"]);
//!
//!     let ids = tokenizer.encode("unable", &mut rng)?;
//!     assert_eq!(ids, vec![1, 2]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod config;
mod error;
mod policy;
mod traits;
mod vocab;
mod wordpiece;


pub use config::WordpieceConfig;
pub use error::{Result, TokenizerError};
pub use policy::{MatchPolicy, DEFAULT_CORRUPTION_PROB};
pub use traits::{TokenId, Vocabulary};
pub use vocab::Vocab;
pub use wordpiece::{whitespace_tokenize, NoisyWordpieceTokenizer};
