//! The game engine: session lifecycle and the operations clients call.
//!
//! `GameEngine` owns at most one session at a time and drives the
//! `Setup -> Active -> Finished` state machine. Requests arrive as
//! explicit records ([`LoadRequest`]) validated at the boundary before
//! they reach session state; responses are snapshots or outcome records,
//! never live references into the session.

pub mod shared;
pub mod snapshot;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CallOutcome, GameSession, LanguageCode, LanguageConfig, LanguageRound, RoundError, SessionPhase};
use crate::distribute::{distribute, DistributionError, DistributionRule};
use crate::loader::{BulkLoader, ValidationError};
use crate::words::WordBank;

pub use shared::SharedEngine;
pub use snapshot::{
    CardSnapshot, LanguageAdvance, LanguageSnapshot, PlayerSnapshot, SessionSnapshot,
};

/// Everything a bulk load needs, in one record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadRequest {
    /// The card-definition document, one card per line.
    pub document: String,

    /// Language configuration in rotation order.
    pub languages: Vec<LanguageConfig>,

    /// Optional explicit word banks. Languages listed here require bank
    /// membership for every card word; others learn their bank from the
    /// cards.
    pub banks: Option<FxHashMap<LanguageCode, Vec<String>>>,

    /// Card-to-player assignment policy.
    pub rule: DistributionRule,

    /// Number of players to create.
    pub players: usize,
}

/// Why a load-and-distribute request was rejected. No session is
/// created; the engine stays in its previous phase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// A session is already loaded; reset before loading again.
    #[error("a session is already loaded; reset first")]
    AlreadyLoaded,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

/// Orchestrates loading, calling, rotation and winner detection.
///
/// Single-threaded by itself; wrap in [`SharedEngine`] for concurrent
/// callers.
#[derive(Debug, Default)]
pub struct GameEngine {
    session: Option<GameSession>,
}

impl GameEngine {
    /// Create an engine in the setup phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session
            .as_ref()
            .map_or(SessionPhase::Setup, GameSession::phase)
    }

    /// Parse, validate and distribute a card document, then activate the
    /// session. All-or-nothing: any error leaves the engine unchanged.
    pub fn load_and_distribute(
        &mut self,
        request: &LoadRequest,
    ) -> Result<SessionSnapshot, LoadError> {
        if self.session.is_some() {
            return Err(LoadError::AlreadyLoaded);
        }
        if request.players < 2 {
            return Err(DistributionError::NotEnoughPlayers(request.players).into());
        }

        let explicit = request.banks.as_ref().map(|banks| {
            let mut bank = WordBank::new();
            for (language, words) in banks {
                bank.insert_bank(*language, words);
            }
            bank
        });

        let loader = BulkLoader::new(&request.languages, explicit.as_ref())?;
        let loaded = loader.load(&request.document)?;

        let names: Vec<String> = (1..=request.players)
            .map(|i| format!("Player_{i}"))
            .collect();
        let dist = distribute(loaded.cards, &names, &request.languages, request.rule)?;

        for warning in &dist.warnings {
            log::warn!("distribution: {warning}");
        }
        log::info!(
            "session loaded: {} players, {} languages, rule {:?}",
            names.len(),
            request.languages.len(),
            request.rule
        );

        let round = LanguageRound::new(request.languages.clone());
        self.session = Some(GameSession::new(
            dist.players,
            round,
            loaded.bank,
            dist.warnings,
        ));
        Ok(self.snapshot())
    }

    /// Call a word under the active language.
    pub fn call_word(&mut self, raw: &str) -> Result<CallOutcome, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NotActive)?;
        let outcome = session.call_word(raw)?;

        if outcome.finished {
            log::info!(
                "word '{}' called for {}: bingo, {} winner(s)",
                outcome.word,
                outcome.language,
                outcome.winners.len()
            );
        } else {
            log::debug!("word '{}' called for {}", outcome.word, outcome.language);
        }
        Ok(outcome)
    }

    /// Advance to the next language in the rotation.
    pub fn next_language(&mut self) -> Result<LanguageAdvance, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NotActive)?;
        if session.advance_language()? {
            let active = snapshot::active_language_snapshot(session);
            log::info!("active language is now {}", active.code);
            Ok(LanguageAdvance::Next(active))
        } else {
            log::info!("language rotation exhausted");
            Ok(LanguageAdvance::Exhausted)
        }
    }

    /// Read-only snapshot of the whole session. Never mutates.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session
            .as_ref()
            .map_or_else(SessionSnapshot::setup, SessionSnapshot::of)
    }

    /// Snapshot of a single player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<PlayerSnapshot> {
        self.session
            .as_ref()
            .and_then(|session| session.player(name))
            .map(PlayerSnapshot::of)
    }

    /// End the session without a winner.
    pub fn force_end(&mut self) -> Result<SessionSnapshot, RoundError> {
        let session = self.session.as_mut().ok_or(RoundError::NotActive)?;
        session.force_end()?;
        log::info!("session force-ended by operator");
        Ok(self.snapshot())
    }

    /// Discard all session state and return to setup.
    pub fn reset(&mut self) -> SessionSnapshot {
        self.session = None;
        log::info!("engine reset to setup");
        self.snapshot()
    }
}
