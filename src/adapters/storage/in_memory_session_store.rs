//! In-Memory Session Store Adapter
//!
//! Keeps team sessions in a process-local map. Sessions are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::TeamSession;
use crate::domain::team::TeamError;
use crate::ports::{RosterSessionStore, SessionEdit};

/// In-memory storage for team sessions
#[derive(Debug, Clone)]
pub struct InMemoryRosterSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, TeamSession>>>,
}

impl InMemoryRosterSessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn not_found(id: &SessionId) -> DomainError {
        DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
            .with_detail("session_id", id.to_string())
    }
}

impl Default for InMemoryRosterSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterSessionStore for InMemoryRosterSessionStore {
    async fn create(&self, session: &TeamSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Session already exists: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<TeamSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: &TeamSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(Self::not_found(session.id())),
        }
    }

    async fn modify(
        &self,
        id: &SessionId,
        edit: SessionEdit<'_>,
    ) -> Result<TeamSession, TeamError> {
        // The write guard is held across read, edit and store.
        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .get_mut(id)
            .ok_or_else(|| TeamError::session_not_found(*id))?;

        let mut draft = stored.clone();
        edit(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
