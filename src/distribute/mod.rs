//! Card distribution: assigning parsed cards to players.
//!
//! Distribution is deterministic: for a fixed card arrival order and
//! player list, the same assignment is reproduced every run. No random
//! tie-breaking, so a distribution can be audited and tested.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::core::{LanguageCode, LanguageConfig, Player};

/// Policy governing how parsed cards are assigned to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionRule {
    /// Every player receives at least one card; all cards are handed out
    /// round-robin in arrival order. Fails if there are more players
    /// than cards.
    #[serde(rename = "minimo_uno")]
    MinimumOne,

    /// Every player receives at most one card per configured language,
    /// handed out round-robin per language. A language with fewer cards
    /// than players leaves some players without one - allowed, but
    /// reported as a coverage warning. Surplus cards of a language stay
    /// unassigned and are reported too.
    #[serde(rename = "uno_por_idioma")]
    OnePerLanguage,
}

/// Imperfect coverage under [`DistributionRule::OnePerLanguage`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionWarning {
    pub language: LanguageCode,

    /// Players who received no card of this language.
    pub players_without_card: usize,

    /// Cards of this language left unassigned (supply beyond one per
    /// player).
    pub unassigned_cards: usize,
}

impl fmt::Display for DistributionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "language {}: {} player(s) without a card, {} card(s) unassigned",
            self.language, self.players_without_card, self.unassigned_cards
        )
    }
}

/// Distribution was infeasible under the chosen rule. The session stays
/// in setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistributionError {
    /// A session needs at least two players.
    #[error("need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    /// `MinimumOne` cannot guarantee one card per player.
    #[error("{players} players but only {cards} cards: cannot give every player one")]
    NotEnoughCards { players: usize, cards: usize },
}

/// A completed assignment plus any coverage warnings.
#[derive(Clone, Debug)]
pub struct Distribution {
    pub players: Vec<Player>,
    pub warnings: Vec<DistributionWarning>,
}

/// Assign cards to named players under a rule.
///
/// `languages` fixes the per-language processing order for
/// [`DistributionRule::OnePerLanguage`]; cards keep their arrival order
/// within a language.
pub fn distribute(
    cards: Vec<Card>,
    names: &[String],
    languages: &[LanguageConfig],
    rule: DistributionRule,
) -> Result<Distribution, DistributionError> {
    if names.len() < 2 {
        return Err(DistributionError::NotEnoughPlayers(names.len()));
    }
    match rule {
        DistributionRule::MinimumOne => minimum_one(cards, names),
        DistributionRule::OnePerLanguage => one_per_language(cards, names, languages),
    }
}

fn minimum_one(cards: Vec<Card>, names: &[String]) -> Result<Distribution, DistributionError> {
    if names.len() > cards.len() {
        return Err(DistributionError::NotEnoughCards {
            players: names.len(),
            cards: cards.len(),
        });
    }

    let mut hands: Vec<Vec<Card>> = vec![Vec::new(); names.len()];
    for (idx, card) in cards.into_iter().enumerate() {
        hands[idx % names.len()].push(card);
    }

    Ok(Distribution {
        players: assemble(names, hands),
        warnings: Vec::new(),
    })
}

fn one_per_language(
    cards: Vec<Card>,
    names: &[String],
    languages: &[LanguageConfig],
) -> Result<Distribution, DistributionError> {
    // Group by language, preserving arrival order within each group.
    let mut by_language: FxHashMap<LanguageCode, Vec<Card>> = FxHashMap::default();
    for card in cards {
        by_language.entry(card.language()).or_default().push(card);
    }

    let mut hands: Vec<Vec<Card>> = vec![Vec::new(); names.len()];
    let mut warnings = Vec::new();

    // Languages processed in rotation order keeps the assignment stable.
    for config in languages {
        let Some(mut supply) = by_language.remove(&config.code) else {
            continue;
        };
        let assigned = supply.len().min(names.len());
        let unassigned = supply.len() - assigned;
        let missing = names.len() - assigned;

        for (idx, card) in supply.drain(..assigned).enumerate() {
            hands[idx].push(card);
        }

        if missing > 0 || unassigned > 0 {
            warnings.push(DistributionWarning {
                language: config.code,
                players_without_card: missing,
                unassigned_cards: unassigned,
            });
        }
    }

    Ok(Distribution {
        players: assemble(names, hands),
        warnings,
    })
}

fn assemble(names: &[String], hands: Vec<Vec<Card>>) -> Vec<Player> {
    names
        .iter()
        .zip(hands)
        .map(|(name, cards)| Player::new(name.clone(), cards))
        .collect()
}
