//! Roster session store port.
//!
//! Holds team sessions between requests. Implementations decide where the
//! sessions live; the domain only needs create, find, update, modify and
//! delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::TeamSession;
use crate::domain::team::TeamError;

/// An edit applied to a stored session by [`RosterSessionStore::modify`].
pub type SessionEdit<'a> = Box<dyn FnOnce(&mut TeamSession) -> Result<(), TeamError> + Send + 'a>;

/// Port for team session persistence.
#[async_trait]
pub trait RosterSessionStore: Send + Sync {
    /// Store a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` if a session with the same ID already exists
    async fn create(&self, session: &TeamSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &SessionId) -> Result<Option<TeamSession>, DomainError>;

    /// Overwrite an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, session: &TeamSession) -> Result<(), DomainError>;

    /// Apply an edit to a stored session as one atomic step.
    ///
    /// No other write to the same session may interleave between reading
    /// it and storing the result. If the edit fails, the stored session is
    /// left unchanged and its error is returned as-is. Returns the session
    /// as stored.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - whatever the edit returns
    async fn modify(
        &self,
        id: &SessionId,
        edit: SessionEdit<'_>,
    ) -> Result<TeamSession, TeamError>;

    /// Remove a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
