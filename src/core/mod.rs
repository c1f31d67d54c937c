//! Core session types: languages, players, rounds, the session aggregate.

pub mod language;
pub mod player;
pub mod rng;
pub mod round;
pub mod session;

pub use language::{InvalidLanguageCode, LanguageCode, LanguageConfig};
pub use player::Player;
pub use rng::GameRng;
pub use round::{CalledWord, LanguageRound};
pub use session::{CallOutcome, FinishReason, GameSession, RoundError, SessionPhase, Winner};
