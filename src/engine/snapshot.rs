//! Read-only session snapshots.
//!
//! Everything a presentation client renders comes from these records:
//! players with their card marks, the language rotation, the call
//! history, and any winners. Building a snapshot never mutates the
//! session.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{
    CalledWord, FinishReason, GameSession, LanguageCode, LanguageConfig, Player, SessionPhase,
    Winner,
};
use crate::distribute::DistributionWarning;

/// One language of the rotation, with its round position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSnapshot {
    pub code: LanguageCode,
    pub name: String,
    pub max_words: usize,
    pub round_index: usize,
}

impl LanguageSnapshot {
    fn of(config: &LanguageConfig, round_index: usize) -> Self {
        Self {
            code: config.code,
            name: config.display_name.clone(),
            max_words: config.max_words,
            round_index,
        }
    }
}

/// One card with its current marking state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: CardId,
    pub language: LanguageCode,
    /// Words in display order.
    pub words: Vec<String>,
    /// Marked words, in display order.
    pub marked: Vec<String>,
    pub hits: usize,
    pub total_words: usize,
    pub is_winner: bool,
}

impl CardSnapshot {
    fn of(card: &Card) -> Self {
        Self {
            id: card.id(),
            language: card.language(),
            words: card.words().to_vec(),
            marked: card.marked_words().map(str::to_string).collect(),
            hits: card.hits(),
            total_words: card.word_count(),
            is_winner: card.is_winner(),
        }
    }
}

/// One player and their cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub cards: Vec<CardSnapshot>,
    pub card_count: usize,
}

impl PlayerSnapshot {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            cards: player.cards().iter().map(CardSnapshot::of).collect(),
            card_count: player.card_count(),
        }
    }
}

/// Full observable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub players: Vec<PlayerSnapshot>,
    pub total_players: usize,
    /// The rotation in round order. Empty in setup.
    pub languages: Vec<LanguageSnapshot>,
    /// Absent in setup.
    pub active_language: Option<LanguageSnapshot>,
    pub languages_exhausted: bool,
    /// Call history in call order.
    pub called_words: Vec<CalledWord>,
    /// Winners in report order; empty until a bingo.
    pub winners: Vec<Winner>,
    pub finish_reason: Option<FinishReason>,
    /// Coverage warnings from distribution.
    pub warnings: Vec<DistributionWarning>,
}

impl SessionSnapshot {
    /// Snapshot of a fresh setup state with no session loaded.
    pub(crate) fn setup() -> Self {
        Self {
            phase: SessionPhase::Setup,
            players: Vec::new(),
            total_players: 0,
            languages: Vec::new(),
            active_language: None,
            languages_exhausted: false,
            called_words: Vec::new(),
            winners: Vec::new(),
            finish_reason: None,
            warnings: Vec::new(),
        }
    }

    /// Snapshot of a live session.
    pub(crate) fn of(session: &GameSession) -> Self {
        let round = session.round();
        let languages: Vec<LanguageSnapshot> = round
            .languages()
            .iter()
            .enumerate()
            .map(|(idx, config)| LanguageSnapshot::of(config, idx))
            .collect();
        let active_language = Some(languages[round.active_index()].clone());

        Self {
            phase: session.phase(),
            players: session.players().iter().map(PlayerSnapshot::of).collect(),
            total_players: session.players().len(),
            languages,
            active_language,
            languages_exhausted: round.is_exhausted(),
            called_words: round.called_words().iter().cloned().collect(),
            winners: session.winners().to_vec(),
            finish_reason: session.finish_reason(),
            warnings: session.warnings().to_vec(),
        }
    }
}

/// Result of advancing the language rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageAdvance {
    /// The rotation moved to this language.
    Next(LanguageSnapshot),
    /// Every language has been visited; the round stays on the last one
    /// and the session remains active.
    Exhausted,
}

pub(crate) fn active_language_snapshot(session: &GameSession) -> LanguageSnapshot {
    let round = session.round();
    LanguageSnapshot::of(round.active(), round.active_index())
}
