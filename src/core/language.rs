//! Language codes and per-language configuration.
//!
//! Every card and every called word is scoped to a language. Languages are
//! identified by a two-letter uppercase code (`SP`, `EN`, ...) which doubles
//! as the card id prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Two-letter uppercase language code.
///
/// Stored as raw ASCII bytes so it is `Copy` and orders lexicographically.
/// Parsing accepts lowercase input and normalizes it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode([u8; 2]);

impl LanguageCode {
    /// Parse a code from a string, returning `None` unless it is exactly
    /// two ASCII letters.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

// Debug prints the code itself so collections of codes stay readable.
impl fmt::Debug for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when a string is not a valid two-letter language code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid language code '{0}': expected exactly 2 letters")]
pub struct InvalidLanguageCode(pub String);

impl FromStr for LanguageCode {
    type Err = InvalidLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidLanguageCode(s.to_string()))
    }
}

// Serialized as the two-letter string so codes are usable as map keys.
impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration for one language in a session.
///
/// The position of a config within the list handed to the engine is its
/// round index: languages rotate in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Two-letter code, also the card id prefix.
    pub code: LanguageCode,

    /// Human-readable name for display ("ESPAÑOL", "INGLÉS", ...).
    pub display_name: String,

    /// Exact number of words on every card of this language.
    pub max_words: usize,
}

impl LanguageConfig {
    /// Create a language configuration.
    pub fn new(code: LanguageCode, display_name: impl Into<String>, max_words: usize) -> Self {
        Self {
            code,
            display_name: display_name.into(),
            max_words,
        }
    }
}
