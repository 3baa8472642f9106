//! Vocabulary capability consumed by the WordPiece scan.

use std::collections::{HashMap, HashSet};

/// Token ID type
pub type TokenId = u32;

/// Read-only vocabulary lookup.
///
/// The scan only ever asks whether a candidate piece exists. Id lookup is
/// optional and only needed by [`super::NoisyWordpieceTokenizer::encode`].
pub trait Vocabulary: Send + Sync {
    /// Whether `token` is a vocabulary entry
    fn contains(&self, token: &str) -> bool;

    /// Get ID for token, if this vocabulary carries ids
    fn token_to_id(&self, _token: &str) -> Option<TokenId> {
        None
    }
}

impl Vocabulary for HashSet<String> {
    fn contains(&self, token: &str) -> bool {
        HashSet::contains(self, token)
    }
}

impl Vocabulary for HashMap<String, TokenId> {
    fn contains(&self, token: &str) -> bool {
        self.contains_key(token)
    }

    fn token_to_id(&self, token: &str) -> Option<TokenId> {
        self.get(token).copied()
    }
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    fn contains(&self, token: &str) -> bool {
        (**self).contains(token)
    }

    fn token_to_id(&self, token: &str) -> Option<TokenId> {
        (**self).token_to_id(token)
    }
}
