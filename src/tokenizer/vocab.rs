//! Immutable token/id vocabulary.

use std::collections::HashMap;
use std::path::Path;

use super::error::{Result, TokenizerError};
use super::traits::{TokenId, Vocabulary};

/// Token ↔ ID vocabulary in BERT `vocab.txt` order
#[derive(Debug, Clone, Default)]
pub struct Vocab {
    token_to_id: HashMap<String, TokenId>,
    id_to_token: Vec<String>,
}

impl Vocab {
    /// Build a vocabulary; ids follow iteration order
    ///
    /// # Errors
    /// Returns [`TokenizerError::DuplicateToken`] if a token repeats.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for (line, token) in tokens.into_iter().enumerate() {
            vocab.push(token.into(), line + 1)?;
        }
        Ok(vocab)
    }

    /// Load a `vocab.txt` file (one token per line, id = zero-based line index)
    ///
    /// A trailing newline does not produce an empty entry. Unlike
    /// [`Vocab::from_tokens`], a repeated line is accepted as in BERT
    /// loaders: every line keeps its id for [`Vocab::id_to_token`], and the
    /// token maps to its last line.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut vocab = Self::default();
        let mut duplicates = 0usize;
        for line in content.lines() {
            if vocab.insert(line.trim_end_matches('\r').to_string())?.is_some() {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            tracing::warn!(
                path = %path.display(),
                duplicates,
                "vocabulary has repeated tokens, last id wins"
            );
        }
        tracing::debug!(path = %path.display(), size = vocab.len(), "loaded vocabulary");
        Ok(vocab)
    }

    fn push(&mut self, token: String, line: usize) -> Result<()> {
        if self.token_to_id.contains_key(&token) {
            return Err(TokenizerError::DuplicateToken { token, line });
        }
        self.insert(token)?;
        Ok(())
    }

    /// Append a token at the next id, returning the id it previously mapped to
    fn insert(&mut self, token: String) -> Result<Option<TokenId>> {
        let id = TokenId::try_from(self.id_to_token.len())
            .map_err(|_| TokenizerError::VocabTooLarge(self.id_to_token.len()))?;
        let previous = self.token_to_id.insert(token.clone(), id);
        self.id_to_token.push(token);
        Ok(previous)
    }

    /// Get vocabulary size
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Get token for ID
    pub fn id_to_token(&self, id: TokenId) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }
}

impl Vocabulary for Vocab {
    fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    fn token_to_id(&self, token: &str) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_vocab_from_tokens_assigns_ids_in_order() {
        let vocab = Vocab::from_tokens(["[PAD]", "[UNK]", "un", "##able"]).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.token_to_id("[UNK]"), Some(1));
        assert_eq!(vocab.token_to_id("##able"), Some(3));
        assert_eq!(vocab.id_to_token(2), Some("un"));
        assert_eq!(vocab.id_to_token(4), None);
    }

    #[test]
    fn test_vocab_rejects_duplicates() {
        let err = Vocab::from_tokens(["a", "b", "a"]).unwrap_err();
        match err {
            TokenizerError::DuplicateToken { token, line } => {
                assert_eq!(token, "a");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_vocab_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[UNK]\r\nhello\n##s\n").unwrap();

        let vocab = Vocab::from_file(file.path()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("hello"));
        assert!(vocab.contains("##s"));
        assert_eq!(vocab.token_to_id("[UNK]"), Some(0));
    }

    #[test]
    fn test_vocab_file_duplicates_last_id_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[UNK]\nhello\nworld\nhello\n").unwrap();

        let vocab = Vocab::from_file(file.path()).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.token_to_id("hello"), Some(3));
        assert_eq!(vocab.id_to_token(1), Some("hello"));
        assert_eq!(vocab.id_to_token(3), Some("hello"));
    }

    #[test]
    fn test_vocab_from_missing_file() {
        let result = Vocab::from_file("/nonexistent/vocab.txt");
        assert!(matches!(result, Err(TokenizerError::Io(_))));
    }

    #[test]
    fn test_vocab_empty() {
        let vocab = Vocab::default();
        assert!(vocab.is_empty());
        assert!(!vocab.contains(""));
    }
}
