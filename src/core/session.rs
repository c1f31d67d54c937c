//! The authoritative session aggregate.
//!
//! A `GameSession` exists only after a successful bulk load and owns
//! everything a round needs: the players with their cards, the language
//! rotation with its call history, and the word bank the load produced.
//! Every round operation is individually atomic - a rejected call leaves
//! history, marks and phase untouched.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{LanguageCode, LanguageRound, Player};
use crate::distribute::DistributionWarning;
use crate::words::{normalize, WordBank};

/// Session lifecycle phase.
///
/// `Setup -> Active` on a successful load and distribute; `Active ->
/// Finished` on the first winning card or an explicit force-end;
/// `Finished` is terminal until reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Setup,
    Active,
    Finished,
}

/// How a finished session ended. Absent while the session is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// At least one card reached full cover.
    Bingo,
    /// The operator ended the session without a winner.
    ForcedEnd,
}

/// A winning card and the player holding it.
///
/// Ordering is player name, then card id - the order simultaneous
/// winners are reported in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Winner {
    pub player: String,
    pub card: CardId,
}

/// Result of a successful word call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    /// The called word, normalized.
    pub word: String,

    /// The language it was called under.
    pub language: LanguageCode,

    /// Every card that reached full cover on this call. Usually empty;
    /// simultaneous completions are all reported.
    pub winners: Vec<Winner>,

    /// Whether this call finished the session.
    pub finished: bool,
}

/// A round operation was rejected. Session state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// No active session: nothing loaded yet, or already finished.
    #[error("no active session")]
    NotActive,

    /// The word is not in the active language's bank. It may well belong
    /// to a different configured language - clients surface this case
    /// distinctly.
    #[error("word '{word}' does not belong to language {language}")]
    WordNotInLanguage { word: String, language: LanguageCode },

    /// The word was already called for the active language this session.
    #[error("word '{word}' was already called for language {language}")]
    AlreadyCalled { word: String, language: LanguageCode },
}

/// Root of all mutable session state.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: Vec<Player>,
    round: LanguageRound,
    bank: WordBank,
    winners: Vec<Winner>,
    finish: Option<FinishReason>,
    warnings: Vec<DistributionWarning>,
}

impl GameSession {
    /// Assemble a session from a completed load and distribution.
    pub(crate) fn new(
        players: Vec<Player>,
        round: LanguageRound,
        bank: WordBank,
        warnings: Vec<DistributionWarning>,
    ) -> Self {
        Self {
            players,
            round,
            bank,
            winners: Vec::new(),
            finish: None,
            warnings,
        }
    }

    /// `Active` until finished; never `Setup` (a session only exists
    /// after a successful load).
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.finish.is_some() {
            SessionPhase::Finished
        } else {
            SessionPhase::Active
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn round(&self) -> &LanguageRound {
        &self.round
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Winners in report order. Empty until a bingo; stays empty for a
    /// forced end.
    #[must_use]
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish
    }

    /// Warnings produced by distribution (partial language coverage).
    #[must_use]
    pub fn warnings(&self) -> &[DistributionWarning] {
        &self.warnings
    }

    /// Call a word under the active language.
    ///
    /// Normalizes the word, validates it against the bank and the call
    /// history, then binary-search marks every card of the active
    /// language. All cards completing on this call are winners, ordered
    /// by player name then card id; any winner finishes the session and
    /// freezes further calls.
    pub fn call_word(&mut self, raw: &str) -> Result<CallOutcome, RoundError> {
        if self.finish.is_some() {
            return Err(RoundError::NotActive);
        }

        let word = normalize(raw);
        let language = self.round.active().code;

        if !self.bank.contains(language, &word) {
            return Err(RoundError::WordNotInLanguage { word, language });
        }
        if self.round.was_called(language, &word) {
            return Err(RoundError::AlreadyCalled { word, language });
        }

        self.round.record_call(language, word.clone());

        let mut winners = Vec::new();
        for player in &mut self.players {
            for card in player.check_word(language, &word) {
                winners.push(Winner {
                    player: player.name().to_string(),
                    card,
                });
            }
        }
        winners.sort();

        let finished = !winners.is_empty();
        if finished {
            self.finish = Some(FinishReason::Bingo);
            self.winners = winners.clone();
        }

        Ok(CallOutcome {
            word,
            language,
            winners,
            finished,
        })
    }

    /// Advance the language rotation. Returns `false` when the rotation
    /// is spent; the session stays active on the last language.
    pub fn advance_language(&mut self) -> Result<bool, RoundError> {
        if self.finish.is_some() {
            return Err(RoundError::NotActive);
        }
        Ok(self.round.advance())
    }

    /// End the session without a winner.
    pub fn force_end(&mut self) -> Result<(), RoundError> {
        if self.finish.is_some() {
            return Err(RoundError::NotActive);
        }
        self.finish = Some(FinishReason::ForcedEnd);
        Ok(())
    }
}
