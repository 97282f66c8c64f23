use std::collections::HashMap;
use std::sync::Mutex;

use super::domain::{Session, SessionId};

/// Storage abstraction for session records, injected into the service so the
/// core never owns a process-wide singleton. Semantics are last-writer-wins;
/// the caller serializes turns per session id.
pub trait SessionStore: Send + Sync {
    fn load(&self, session_id: &SessionId) -> Result<Option<Session>, SessionStoreError>;
    fn save(&self, session: Session) -> Result<(), SessionStoreError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store backing the default deployment. Swap for Redis or a
/// database by implementing `SessionStore` on the adapter.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self, session_id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))?;
        Ok(sessions.get(&session_id.0).cloned())
    }

    fn save(&self, session: Session) -> Result<(), SessionStoreError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))?;
        sessions.insert(session.session_id.0.clone(), session);
        Ok(())
    }
}
