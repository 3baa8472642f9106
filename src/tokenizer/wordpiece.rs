//! Greedy longest-match-first WordPiece with randomized lookup failure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::config::WordpieceConfig;
use super::error::{Result, TokenizerError};
use super::traits::{TokenId, Vocabulary};

/// Basic whitespace cleaning and splitting; empty text yields no words
pub fn whitespace_tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// WordPiece tokenizer whose vocabulary hits are filtered by a [`MatchPolicy`]
///
/// With [`MatchPolicy::Exact`] this is the standard BERT WordPiece scan. With
/// [`MatchPolicy::Noisy`] a real vocabulary hit is sometimes rejected, which
/// pushes the scan to a shorter piece or makes the whole word unknown.
///
/// [`MatchPolicy`]: super::MatchPolicy
/// [`MatchPolicy::Exact`]: super::MatchPolicy::Exact
/// [`MatchPolicy::Noisy`]: super::MatchPolicy::Noisy
#[derive(Debug, Clone)]
pub struct NoisyWordpieceTokenizer<V> {
    vocab: V,
    config: WordpieceConfig,
}

impl<V: Vocabulary> NoisyWordpieceTokenizer<V> {
    /// Create a tokenizer over an externally supplied vocabulary
    pub fn new(vocab: V, config: WordpieceConfig) -> Self {
        Self { vocab, config }
    }

    /// Underlying vocabulary
    pub fn vocab(&self) -> &V {
        &self.vocab
    }

    /// Tokenizer configuration
    pub fn config(&self) -> &WordpieceConfig {
        &self.config
    }

    fn unknown(&self) -> Vec<String> {
        vec![self.config.unk_token.clone()]
    }

    /// Split a single whitespace-free word into pieces.
    ///
    /// Candidates are tried from the longest remaining substring down to one
    /// character. The vocabulary is checked first and the policy is consulted
    /// only for candidates that are present, so noisy mode draws once per
    /// vocabulary hit, accepted or not. If no candidate is accepted at some
    /// position the whole word becomes `[unk_token]`.
    pub fn tokenize_word<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Vec<String> {
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let n_chars = bounds.len() - 1;

        if n_chars > self.config.max_input_chars_per_word {
            return self.unknown();
        }

        let prefix = self.config.continuation_prefix.as_str();
        let mut pieces = Vec::new();
        let mut candidate = String::with_capacity(prefix.len() + word.len());
        let mut start = 0;

        while start < n_chars {
            let mut end = n_chars;
            let mut matched = false;

            while start < end {
                candidate.clear();
                if start > 0 {
                    candidate.push_str(prefix);
                }
                candidate.push_str(&word[bounds[start]..bounds[end]]);

                if self.vocab.contains(&candidate) && self.config.policy.accepts(rng) {
                    matched = true;
                    break;
                }
                end -= 1;
            }

            if !matched {
                tracing::trace!(word, position = start, "no accepted piece, word is unknown");
                return self.unknown();
            }
            pieces.push(candidate.clone());
            start = end;
        }

        pieces
    }

    /// Tokenize text: whitespace split, then WordPiece on each word in order
    pub fn tokenize<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        let mut output = Vec::new();
        for word in whitespace_tokenize(text) {
            output.extend(self.tokenize_word(word, rng));
        }
        output
    }

    /// Tokenize text and map pieces to token ids
    ///
    /// # Errors
    /// Returns [`TokenizerError::UnknownToken`] if a produced piece (including
    /// the unknown token itself) has no id in the vocabulary.
    pub fn encode<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<Vec<TokenId>> {
        self.tokenize(text, rng)
            .into_iter()
            .map(|token| {
                self.vocab
                    .token_to_id(&token)
                    .ok_or(TokenizerError::UnknownToken(token))
            })
            .collect()
    }

    /// Tokenize a batch serially with one shared generator.
    ///
    /// Draw order is exactly that of calling [`Self::tokenize`] on each text in
    /// turn, so results are reproducible from the generator's seed.
    pub fn tokenize_batch<S, R>(&self, texts: &[S], rng: &mut R) -> Vec<Vec<String>>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        texts
            .iter()
            .map(|text| self.tokenize(text.as_ref(), rng))
            .collect()
    }

    /// Tokenize a batch in parallel.
    ///
    /// Text `i` is tokenized with its own `StdRng` seeded from `seed + i`.
    /// Output is reproducible for a given seed regardless of thread count or
    /// scheduling, but it does not match [`Self::tokenize_batch`] driven by a
    /// single generator: use the serial path when one shared draw sequence
    /// must be preserved.
    pub fn tokenize_batch_parallel<S>(&self, texts: &[S], seed: u64) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.tokenize(text.as_ref(), &mut rng)
            })
            .collect()
    }
}
