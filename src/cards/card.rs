//! Cards and the binary-search matching path.
//!
//! One call touches every live card of the active language, so per-card
//! lookup must be sub-linear in card size. Each card builds a
//! lexicographically sorted index over its words once at creation; every
//! lookup afterwards is a binary search through that index. The visible
//! word order is preserved for display.

use smallvec::SmallVec;

use crate::core::LanguageCode;
use crate::words::normalize;

use super::CardId;

/// One player's word grid for one language.
///
/// The word list is fixed at creation; only the marking state mutates,
/// and only through [`Card::mark`]. Invariants held at all times:
/// marked flags cover a subset of the words, `hits` equals the number of
/// set flags, and the card is a winner exactly when every word is marked.
#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,

    /// Words in display order, normalized uppercase, distinct.
    words: Vec<String>,

    /// Indices into `words`, sorted lexicographically by the word they
    /// point at. Built once; the binary-search side of the card.
    sorted: SmallVec<[u16; 32]>,

    /// Marking flags parallel to `words`.
    marked: Vec<bool>,

    /// Number of set flags.
    hits: usize,
}

impl Card {
    /// Create a card from its id and word list.
    ///
    /// Words are normalized to uppercase. The caller (bulk loader or
    /// generator) guarantees they are distinct after normalization.
    #[must_use]
    pub fn new(id: CardId, words: Vec<String>) -> Self {
        let words: Vec<String> = words.iter().map(|w| normalize(w)).collect();
        assert!(words.len() <= u16::MAX as usize, "card word list too large");

        let mut sorted: SmallVec<[u16; 32]> = (0..words.len() as u16).collect();
        sorted.sort_unstable_by(|&a, &b| words[a as usize].cmp(&words[b as usize]));

        debug_assert!(
            sorted.windows(2).all(|w| words[w[0] as usize] != words[w[1] as usize]),
            "card words must be distinct"
        );

        let marked = vec![false; words.len()];
        Self {
            id,
            words,
            sorted,
            marked,
            hits: 0,
        }
    }

    /// The card's id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The language this card belongs to.
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.id.language()
    }

    /// Words in display order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words on the card.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of marked words.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Marked words, in display order.
    pub fn marked_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .zip(&self.marked)
            .filter_map(|(word, &marked)| marked.then_some(word.as_str()))
    }

    /// Full cover: every word marked (and the card is non-empty).
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.hits == self.words.len() && !self.words.is_empty()
    }

    /// Binary-search membership over the sorted index. O(log n).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Mark a called word. Returns `true` only when the word is on the
    /// card and was not already marked; re-marking is a no-op.
    pub fn mark(&mut self, word: &str) -> bool {
        let Some(pos) = self.position(word) else {
            return false;
        };
        if self.marked[pos] {
            return false;
        }
        self.marked[pos] = true;
        self.hits += 1;
        true
    }

    /// Display-order position of a word via binary search.
    fn position(&self, word: &str) -> Option<usize> {
        self.sorted
            .binary_search_by(|&i| self.words[i as usize].as_str().cmp(word))
            .ok()
            .map(|slot| self.sorted[slot] as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card(words: &[&str]) -> Card {
        let id = CardId::parse("SP000001").unwrap();
        Card::new(id, words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_display_order_preserved() {
        let card = card(&["PERRO", "CASA", "GATO"]);
        assert_eq!(card.words(), ["PERRO", "CASA", "GATO"]);
    }

    #[test]
    fn test_contains_via_binary_search() {
        let card = card(&["PERRO", "CASA", "GATO", "LUNA", "SOL"]);
        for word in ["PERRO", "CASA", "GATO", "LUNA", "SOL"] {
            assert!(card.contains(word), "missing {word}");
        }
        assert!(!card.contains("MAR"));
        assert!(!card.contains(""));
    }

    #[test]
    fn test_mark_and_hits() {
        let mut card = card(&["CASA", "PERRO"]);

        assert!(card.mark("CASA"));
        assert_eq!(card.hits(), 1);
        assert!(!card.is_winner());

        // Re-marking is a no-op, not an error
        assert!(!card.mark("CASA"));
        assert_eq!(card.hits(), 1);

        // Word not on the card
        assert!(!card.mark("GATO"));
        assert_eq!(card.hits(), 1);

        assert!(card.mark("PERRO"));
        assert_eq!(card.hits(), 2);
        assert!(card.is_winner());
    }

    #[test]
    fn test_marked_words_subset_invariant() {
        let mut card = card(&["CASA", "PERRO", "GATO"]);
        card.mark("PERRO");
        card.mark("CASA");

        let marked: Vec<_> = card.marked_words().collect();
        assert_eq!(marked, ["CASA", "PERRO"]);
        assert_eq!(card.hits(), marked.len());
        assert!(marked.iter().all(|w| card.words().iter().any(|c| c == w)));
    }

    #[test]
    fn test_normalization_at_creation() {
        let card = card(&[" casa ", "perro"]);
        assert_eq!(card.words(), ["CASA", "PERRO"]);
        assert!(card.contains("CASA"));
    }

    proptest! {
        // Binary search must agree with a linear scan for any probe word.
        #[test]
        fn prop_binary_search_matches_linear_scan(
            words in proptest::collection::btree_set("[A-Z]{1,12}", 1..24),
            probes in proptest::collection::vec("[A-Z]{1,12}", 0..32),
        ) {
            let words: Vec<String> = words.into_iter().collect();
            let card = Card::new(
                CardId::parse("EN000001").unwrap(),
                words.clone(),
            );

            for probe in probes.iter().chain(words.iter()) {
                let linear = words.iter().any(|w| w == probe);
                prop_assert_eq!(card.contains(probe), linear);
            }
        }

        // Marking every word in any order always yields a winner, and the
        // hit count never disagrees with the marked set.
        #[test]
        fn prop_full_cover_wins(
            words in proptest::collection::btree_set("[A-Z]{1,8}", 1..16),
        ) {
            let words: Vec<String> = words.into_iter().collect();
            let mut card = Card::new(
                CardId::parse("EN000002").unwrap(),
                words.clone(),
            );

            for (n, word) in words.iter().rev().enumerate() {
                prop_assert!(!card.is_winner());
                prop_assert!(card.mark(word));
                prop_assert_eq!(card.hits(), n + 1);
                prop_assert_eq!(card.hits(), card.marked_words().count());
            }
            prop_assert!(card.is_winner());
        }
    }
}
