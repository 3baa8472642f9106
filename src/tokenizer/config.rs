//! WordPiece tokenizer configuration.

use serde::{Deserialize, Serialize};

use super::policy::MatchPolicy;

/// WordPiece configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordpieceConfig {
    /// Words with more characters than this become the unknown token
    pub max_input_chars_per_word: usize,
    /// Unknown token
    pub unk_token: String,
    /// Prefix marking non-initial subword pieces
    pub continuation_prefix: String,
    /// Acceptance policy for vocabulary hits
    pub policy: MatchPolicy,
}

impl Default for WordpieceConfig {
    fn default() -> Self {
        Self {
            max_input_chars_per_word: 100,
            unk_token: "[UNK]".to_string(),
            continuation_prefix: "##".to_string(),
            policy: MatchPolicy::default(),
        }
    }
}

impl WordpieceConfig {
    /// Deterministic greedy longest-match configuration
    pub fn exact() -> Self {
        Self {
            policy: MatchPolicy::Exact,
            ..Default::default()
        }
    }

    /// Noisy configuration with a given corruption probability
    pub fn noisy(corruption_prob: f64) -> Self {
        Self {
            policy: MatchPolicy::Noisy { corruption_prob },
            ..Default::default()
        }
    }

    /// Set maximum characters per word
    pub fn with_max_input_chars_per_word(mut self, max: usize) -> Self {
        self.max_input_chars_per_word = max;
        self
    }

    /// Set unknown token
    pub fn with_unk_token(mut self, unk: impl Into<String>) -> Self {
        self.unk_token = unk.into();
        self
    }

    /// Set continuation prefix
    pub fn with_continuation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.continuation_prefix = prefix.into();
        self
    }

    /// Set match policy
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordpiece_config_default() {
        let config = WordpieceConfig::default();
        assert_eq!(config.max_input_chars_per_word, 100);
        assert_eq!(config.unk_token, "[UNK]");
        assert_eq!(config.continuation_prefix, "##");
        assert_eq!(config.policy.corruption_prob(), 0.1);
    }

    #[test]
    fn test_wordpiece_config_exact() {
        let config = WordpieceConfig::exact().with_max_input_chars_per_word(5);
        assert_eq!(config.policy, MatchPolicy::Exact);
        assert_eq!(config.max_input_chars_per_word, 5);
    }

    #[test]
    fn test_wordpiece_config_builders() {
        let config = WordpieceConfig::noisy(0.3)
            .with_unk_token("<unk>")
            .with_continuation_prefix("@@");
        assert_eq!(config.unk_token, "<unk>");
        assert_eq!(config.continuation_prefix, "@@");
        assert_eq!(config.policy.corruption_prob(), 0.3);
    }

    #[test]
    fn test_wordpiece_config_partial_yaml() {
        let config: WordpieceConfig = serde_yaml::from_str("unk_token: \"<unk>\"\n").unwrap();
        assert_eq!(config.unk_token, "<unk>");
        assert_eq!(config.max_input_chars_per_word, 100);
    }
}
