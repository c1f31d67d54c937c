//! Language rotation and call history.
//!
//! A session plays its configured languages in input order, one at a time.
//! The rotation is a single pass: once the last language has been visited,
//! advancing reports exhaustion and stays on the last language - ending a
//! winnerless session is the operator's explicit decision, never automatic.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{LanguageCode, LanguageConfig};

/// One entry of the call history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalledWord {
    pub language: LanguageCode,
    pub word: String,
}

/// The rotation of active languages plus the append-only call history.
#[derive(Clone, Debug)]
pub struct LanguageRound {
    /// Rotation order, fixed for the session. Position = round index.
    languages: Vec<LanguageConfig>,

    current: usize,

    /// Set once the whole rotation has been visited.
    exhausted: bool,

    /// Append-only history, in call order.
    called: Vector<CalledWord>,

    /// Duplicate-call rejection index over `called`.
    called_index: FxHashSet<CalledWord>,
}

impl LanguageRound {
    /// Create a round over a non-empty rotation, starting on the first
    /// configured language.
    #[must_use]
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        assert!(!languages.is_empty(), "round needs at least one language");
        Self {
            languages,
            current: 0,
            exhausted: false,
            called: Vector::new(),
            called_index: FxHashSet::default(),
        }
    }

    /// The currently active language.
    #[must_use]
    pub fn active(&self) -> &LanguageConfig {
        &self.languages[self.current]
    }

    /// Round index of the active language.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.current
    }

    /// The full rotation, in order.
    #[must_use]
    pub fn languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Whether the rotation has been fully visited.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Advance to the next language in the rotation.
    ///
    /// Returns `false` once every language has been visited; the round
    /// then stays on the last language. Never clears the call history.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.languages.len() {
            self.current += 1;
            true
        } else {
            self.exhausted = true;
            false
        }
    }

    /// Whether a word has already been called for a language this session.
    #[must_use]
    pub fn was_called(&self, language: LanguageCode, word: &str) -> bool {
        self.called_index.contains(&CalledWord {
            language,
            word: word.to_string(),
        })
    }

    /// Record a successful call.
    pub(crate) fn record_call(&mut self, language: LanguageCode, word: String) {
        let entry = CalledWord { language, word };
        self.called_index.insert(entry.clone());
        self.called.push_back(entry);
    }

    /// Call history in call order.
    #[must_use]
    pub fn called_words(&self) -> &Vector<CalledWord> {
        &self.called
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(codes: &[&str]) -> LanguageRound {
        LanguageRound::new(
            codes
                .iter()
                .map(|c| LanguageConfig::new(LanguageCode::parse(c).unwrap(), *c, 2))
                .collect(),
        )
    }

    #[test]
    fn test_rotation_in_input_order() {
        let mut round = round(&["SP", "EN", "PT"]);
        assert_eq!(round.active().code.to_string(), "SP");
        assert_eq!(round.active_index(), 0);

        assert!(round.advance());
        assert_eq!(round.active().code.to_string(), "EN");

        assert!(round.advance());
        assert_eq!(round.active().code.to_string(), "PT");
        assert_eq!(round.active_index(), 2);
    }

    #[test]
    fn test_exhaustion_stays_on_last() {
        let mut round = round(&["SP", "EN"]);
        assert!(round.advance());

        // Rotation spent: no wrap, active stays EN
        assert!(!round.advance());
        assert!(round.is_exhausted());
        assert_eq!(round.active().code.to_string(), "EN");

        // Further advances keep reporting exhaustion
        assert!(!round.advance());
        assert_eq!(round.active().code.to_string(), "EN");
    }

    #[test]
    fn test_single_language_round() {
        let mut round = round(&["SP"]);
        assert!(!round.advance());
        assert!(round.is_exhausted());
        assert_eq!(round.active().code.to_string(), "SP");
    }

    #[test]
    fn test_call_history() {
        let mut round = round(&["SP", "EN"]);
        let sp = LanguageCode::parse("SP").unwrap();
        let en = LanguageCode::parse("EN").unwrap();

        assert!(!round.was_called(sp, "CASA"));
        round.record_call(sp, "CASA".to_string());

        assert!(round.was_called(sp, "CASA"));
        // Same word under another language is a fresh call
        assert!(!round.was_called(en, "CASA"));

        // Advancing never clears history
        round.advance();
        assert!(round.was_called(sp, "CASA"));
        assert_eq!(round.called_words().len(), 1);
    }
}
