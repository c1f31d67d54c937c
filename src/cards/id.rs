//! Card identifiers.
//!
//! A card id is exactly two uppercase letters (the language code) followed
//! by six digits: `SP000001`. The prefix ties every card to a language, the
//! serial makes it unique within the bulk-load document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::LanguageCode;

const SERIAL_DIGITS: usize = 6;
const MAX_SERIAL: u32 = 999_999;

/// Strongly typed card identifier.
///
/// Orders by language code, then serial - the order used to break winner
/// ties within a player.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId {
    language: LanguageCode,
    serial: u32,
}

impl CardId {
    /// Create a card id from parts. `None` if the serial exceeds 6 digits.
    #[must_use]
    pub fn new(language: LanguageCode, serial: u32) -> Option<Self> {
        (serial <= MAX_SERIAL).then_some(Self { language, serial })
    }

    /// The language this card belongs to (the 2-letter id prefix).
    #[must_use]
    pub fn language(self) -> LanguageCode {
        self.language
    }

    /// The 6-digit serial.
    #[must_use]
    pub fn serial(self) -> u32 {
        self.serial
    }

    /// Parse the canonical 8-character form. Lowercase letters are accepted
    /// and normalized.
    pub fn parse(s: &str) -> Result<Self, CardIdError> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 {
            return Err(CardIdError::Length(s.chars().count()));
        }
        let language = LanguageCode::parse(&s[..2]).ok_or(CardIdError::Prefix)?;
        if !bytes[2..].iter().all(u8::is_ascii_digit) {
            return Err(CardIdError::Serial);
        }
        // 6 ASCII digits always fit in u32
        let serial: u32 = s[2..].parse().map_err(|_| CardIdError::Serial)?;
        Ok(Self { language, serial })
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:0width$}", self.language, self.serial, width = SERIAL_DIGITS)
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Why a card id failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardIdError {
    /// Wrong length; ids are exactly 8 characters.
    #[error("must be exactly 8 characters, got {0}")]
    Length(usize),

    /// First two characters must be letters.
    #[error("must start with 2 letters")]
    Prefix,

    /// Last six characters must be digits.
    #[error("must end with 6 digits")]
    Serial,
}

impl FromStr for CardId {
    type Err = CardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the canonical 8-character string.
impl Serialize for CardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let id = CardId::parse("SP000001").unwrap();
        assert_eq!(id.language().to_string(), "SP");
        assert_eq!(id.serial(), 1);
        assert_eq!(id.to_string(), "SP000001");
    }

    #[test]
    fn test_parse_lowercase_normalized() {
        let id = CardId::parse("sp000042").unwrap();
        assert_eq!(id.to_string(), "SP000042");
    }

    #[test]
    fn test_parse_bad_length() {
        assert_eq!(CardId::parse("SP1").unwrap_err(), CardIdError::Length(3));
        assert_eq!(
            CardId::parse("SP0000001").unwrap_err(),
            CardIdError::Length(9)
        );
    }

    #[test]
    fn test_parse_bad_prefix() {
        assert_eq!(CardId::parse("1P000001").unwrap_err(), CardIdError::Prefix);
        assert_eq!(CardId::parse("S0000001").unwrap_err(), CardIdError::Prefix);
    }

    #[test]
    fn test_parse_bad_serial() {
        assert_eq!(CardId::parse("SP00000A").unwrap_err(), CardIdError::Serial);
        assert_eq!(CardId::parse("SPABCDEF").unwrap_err(), CardIdError::Serial);
    }

    #[test]
    fn test_new_rejects_wide_serial() {
        let sp = LanguageCode::parse("SP").unwrap();
        assert!(CardId::new(sp, 999_999).is_some());
        assert!(CardId::new(sp, 1_000_000).is_none());
    }

    #[test]
    fn test_ordering_language_then_serial() {
        let a = CardId::parse("EN000009").unwrap();
        let b = CardId::parse("SP000001").unwrap();
        let c = CardId::parse("SP000002").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde_as_string() {
        let id = CardId::parse("EN000314").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"EN000314\"");

        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
