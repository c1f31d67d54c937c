//! Word banks: the canonical set of valid words per language.
//!
//! A bank is either supplied by the caller up front (in which case every
//! card word must already be a member) or accumulated from parsed cards.
//! Lookups for an unknown language see an empty bank, not an error -
//! callers decide whether that matters.

use im::OrdSet;
use rustc_hash::FxHashMap;

use crate::core::LanguageCode;

/// Normalize a raw word: trim surrounding whitespace and uppercase.
///
/// All words stored in banks and on cards go through this, as does every
/// called word, so membership checks are case-insensitive by construction.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Per-language sorted sets of canonical words.
///
/// Backed by `im::OrdSet` so `words_for` hands out a cheap persistent
/// clone and iteration is always in lexicographic order.
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    banks: FxHashMap<LanguageCode, OrdSet<String>>,
}

impl WordBank {
    /// Create an empty word bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a language has a bank at all.
    ///
    /// Distinguishes "no bank supplied" (words are learned from cards)
    /// from "bank supplied" (words must be members).
    #[must_use]
    pub fn has_language(&self, language: LanguageCode) -> bool {
        self.banks.contains_key(&language)
    }

    /// Check membership. Unknown languages contain nothing.
    #[must_use]
    pub fn contains(&self, language: LanguageCode, word: &str) -> bool {
        self.banks
            .get(&language)
            .map_or(false, |bank| bank.contains(word))
    }

    /// Add a word to a language's bank. Idempotent; empty words are ignored.
    pub fn add(&mut self, language: LanguageCode, word: &str) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        self.banks.entry(language).or_default().insert(word);
    }

    /// Register a bank for a language, adding all given words.
    ///
    /// The language entry exists afterwards even if the list was empty,
    /// which marks the bank as explicitly supplied.
    pub fn insert_bank<I, S>(&mut self, language: LanguageCode, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.banks.entry(language).or_default();
        for word in words {
            self.add(language, word.as_ref());
        }
    }

    /// Sorted set of words for a language. Empty for unknown languages.
    #[must_use]
    pub fn words_for(&self, language: LanguageCode) -> OrdSet<String> {
        self.banks.get(&language).cloned().unwrap_or_default()
    }

    /// Number of words in a language's bank.
    #[must_use]
    pub fn len(&self, language: LanguageCode) -> usize {
        self.banks.get(&language).map_or(0, OrdSet::len)
    }

    /// True if no language has any bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp() -> LanguageCode {
        LanguageCode::parse("SP").unwrap()
    }

    fn en() -> LanguageCode {
        LanguageCode::parse("EN").unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  casa "), "CASA");
        assert_eq!(normalize("España"), "ESPAÑA");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_add_and_contains() {
        let mut bank = WordBank::new();
        bank.add(sp(), "casa");

        assert!(bank.contains(sp(), "CASA"));
        assert!(!bank.contains(sp(), "PERRO"));
        // Unknown language yields an empty bank, not a fault
        assert!(!bank.contains(en(), "CASA"));
        assert!(bank.words_for(en()).is_empty());
    }

    #[test]
    fn test_add_idempotent() {
        let mut bank = WordBank::new();
        bank.add(sp(), "CASA");
        bank.add(sp(), "CASA");
        bank.add(sp(), " casa ");

        assert_eq!(bank.len(sp()), 1);
    }

    #[test]
    fn test_empty_word_ignored() {
        let mut bank = WordBank::new();
        bank.add(sp(), "   ");
        assert!(!bank.has_language(sp()));
    }

    #[test]
    fn test_insert_bank_marks_language() {
        let mut bank = WordBank::new();
        bank.insert_bank(sp(), Vec::<String>::new());

        assert!(bank.has_language(sp()));
        assert_eq!(bank.len(sp()), 0);
    }

    #[test]
    fn test_words_for_sorted() {
        let mut bank = WordBank::new();
        bank.insert_bank(sp(), ["PERRO", "CASA", "GATO"]);

        let words: Vec<_> = bank.words_for(sp()).into_iter().collect();
        assert_eq!(words, ["CASA", "GATO", "PERRO"]);
    }
}
