use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::config::words::WordsConfig;
use crate::domain::GameSession;

/// Handle to one player's session. The mutex serializes concurrent requests
/// for the same pseudonym; different pseudonyms never contend.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Application state containing shared resources.
///
/// The session registry lives for the process only; there is no persistence
/// across restarts by design.
#[derive(Debug)]
pub struct AppState {
    sessions: DashMap<String, SharedSession>,
    words: WordsConfig,
}

impl AppState {
    pub fn new(words: WordsConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            words,
        }
    }

    pub fn words(&self) -> &WordsConfig {
        &self.words
    }

    /// Register a session for `pseudo`, keeping any existing one.
    pub fn register(&self, pseudo: &str) -> SharedSession {
        self.sessions
            .entry(pseudo.to_string())
            .or_default()
            .clone()
    }

    pub fn session(&self, pseudo: &str) -> Option<SharedSession> {
        self.sessions.get(pseudo).map(|entry| entry.value().clone())
    }

    /// Drop the registry entry for `pseudo` (logout).
    pub fn remove(&self, pseudo: &str) {
        self.sessions.remove(pseudo);
    }

    #[cfg(test)]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
