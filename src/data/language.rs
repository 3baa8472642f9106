//! Comment languages and their one-hot encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// Comment language, in one-hot index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Tr,
    Pt,
    Ru,
    Fr,
    It,
    Es,
}

impl Language {
    /// Number of supported languages
    pub const COUNT: usize = 7;

    /// All languages in index order
    pub const ALL: [Language; Self::COUNT] = [
        Self::En,
        Self::Tr,
        Self::Pt,
        Self::Ru,
        Self::Fr,
        Self::It,
        Self::Es,
    ];

    /// Position in [`Language::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Es => "es",
        }
    }

    /// One-hot row of the identity matrix
    pub fn one_hot(self) -> [f32; Self::COUNT] {
        let mut row = [0.0; Self::COUNT];
        row[self.index()] = 1.0;
        row
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| DataError::UnknownLanguage(s.to_string()))
    }
}
