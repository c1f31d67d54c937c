//! Shared engine handle for concurrent callers.
//!
//! One operator UI issues calls while any number of pollers read state.
//! Mutations take the write lock, so "check active language, scan cards,
//! detect winner, transition" is observed atomically and exactly one
//! transition to finished can happen; snapshots take the read lock and
//! see a state fully before or fully after any mutation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::{CallOutcome, RoundError, SessionPhase};

use super::{GameEngine, LanguageAdvance, LoadError, LoadRequest, PlayerSnapshot, SessionSnapshot};

/// Cloneable handle to one engine behind a reader-writer lock.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<GameEngine>>,
}

impl SharedEngine {
    /// Create a shared engine in the setup phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`GameEngine::load_and_distribute`].
    pub fn load_and_distribute(
        &self,
        request: &LoadRequest,
    ) -> Result<SessionSnapshot, LoadError> {
        self.write().load_and_distribute(request)
    }

    /// See [`GameEngine::call_word`].
    pub fn call_word(&self, raw: &str) -> Result<CallOutcome, RoundError> {
        self.write().call_word(raw)
    }

    /// See [`GameEngine::next_language`].
    pub fn next_language(&self) -> Result<LanguageAdvance, RoundError> {
        self.write().next_language()
    }

    /// See [`GameEngine::force_end`].
    pub fn force_end(&self) -> Result<SessionSnapshot, RoundError> {
        self.write().force_end()
    }

    /// See [`GameEngine::reset`].
    pub fn reset(&self) -> SessionSnapshot {
        self.write().reset()
    }

    /// See [`GameEngine::snapshot`]. May run concurrently with other
    /// readers.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.read().snapshot()
    }

    /// See [`GameEngine::player`].
    #[must_use]
    pub fn player(&self, name: &str) -> Option<PlayerSnapshot> {
        self.read().player(name)
    }

    /// See [`GameEngine::phase`].
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.read().phase()
    }

    // A poisoned lock means a panic mid-mutation: the session can no
    // longer be trusted and is not auto-repaired.
    fn read(&self) -> RwLockReadGuard<'_, GameEngine> {
        self.inner.read().expect("session lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameEngine> {
        self.inner.write().expect("session lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LanguageCode, LanguageConfig};
    use crate::distribute::DistributionRule;

    fn request() -> LoadRequest {
        LoadRequest {
            document: "SP000001 CASA PERRO\nSP000002 GATO LUNA\n".to_string(),
            languages: vec![LanguageConfig::new(
                LanguageCode::parse("SP").unwrap(),
                "ESPAÑOL",
                2,
            )],
            banks: None,
            rule: DistributionRule::MinimumOne,
            players: 2,
        }
    }

    #[test]
    fn test_handle_clones_share_state() {
        let engine = SharedEngine::new();
        let other = engine.clone();

        engine.load_and_distribute(&request()).unwrap();
        assert_eq!(other.phase(), SessionPhase::Active);

        other.call_word("CASA").unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.called_words.len(), 1);
    }

    #[test]
    fn test_reads_while_active() {
        let engine = SharedEngine::new();
        engine.load_and_distribute(&request()).unwrap();

        let snap = engine.snapshot();
        assert_eq!(snap.total_players, 2);
        assert!(engine.player("Player_2").is_some());
    }
}
