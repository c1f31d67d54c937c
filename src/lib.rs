//! # wordbingo
//!
//! A multilanguage word-bingo session engine. An operator calls words one
//! at a time, scoped to a rotating active language; every card of that
//! language is checked via binary search, and the first card to cover all
//! its words wins.
//!
//! ## Design Principles
//!
//! 1. **One aggregate, explicit boundary**: all mutable state lives in a
//!    single `GameSession` owned by the engine - never ambient statics,
//!    so independent sessions (and tests) coexist freely.
//!
//! 2. **Sub-linear matching**: each card keeps a sorted index over its
//!    words, built once at creation; a call binary-searches every live
//!    card of the active language in O(log n) per card.
//!
//! 3. **Deterministic by default**: distribution and language rotation
//!    never consult the RNG, so a fixed input reproduces the same session
//!    every run. Randomness is opt-in (card generation) and seeded.
//!
//! 4. **All-or-nothing loads, atomic calls**: a bad document line rejects
//!    the whole batch; a rejected call leaves history, marks and phase
//!    untouched.
//!
//! ## Modules
//!
//! - `core`: language codes and configs, players, rotation, the session
//!   aggregate, RNG
//! - `words`: per-language word banks
//! - `cards`: card ids, word grids with binary-search marking, generation
//! - `loader`: bulk document parsing and validation
//! - `distribute`: deterministic card-to-player assignment
//! - `engine`: the operation surface and the shared concurrent handle

pub mod cards;
pub mod core;
pub mod distribute;
pub mod engine;
pub mod loader;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    CallOutcome, CalledWord, FinishReason, GameRng, GameSession, InvalidLanguageCode,
    LanguageCode, LanguageConfig, LanguageRound, Player, RoundError, SessionPhase, Winner,
};

pub use crate::cards::{Card, CardGenerator, CardId, CardIdError, GenerateError};

pub use crate::words::WordBank;

pub use crate::loader::{BulkLoader, LoadedCards, ValidationError};

pub use crate::distribute::{
    distribute, Distribution, DistributionError, DistributionRule, DistributionWarning,
};

pub use crate::engine::{
    CardSnapshot, GameEngine, LanguageAdvance, LanguageSnapshot, LoadError, LoadRequest,
    PlayerSnapshot, SessionSnapshot, SharedEngine,
};
