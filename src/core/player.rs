//! Players and their card sets.

use crate::cards::{Card, CardId};
use crate::core::LanguageCode;

/// A session participant owning an ordered set of cards.
///
/// Names are unique within a session; every card belongs to exactly one
/// player. Ownership is a containment relation only - cards never reach
/// back into their player.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Create a player with their cards. Called by the distributor.
    pub(crate) fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// The player's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's cards, in assignment order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Look up one card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Mark a called word on every card of the active language.
    ///
    /// Cards of other languages are skipped entirely. Returns the ids of
    /// cards that became fully covered by this call, in assignment order.
    pub(crate) fn check_word(&mut self, language: LanguageCode, word: &str) -> Vec<CardId> {
        let mut completed = Vec::new();
        for card in &mut self.cards {
            if card.language() != language {
                continue;
            }
            if card.mark(word) && card.is_winner() {
                completed.push(card.id());
            }
        }
        completed
    }
}
