//! Team-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MemberNotFound | 404 |
//! | SessionNotFound | 404 |
//! | Validation | 400 |
//! | Serialization | 500 |
//! | Storage | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors raised by roster edits, lookups and session handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    /// The named member is not in the roster.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// No session exists with this id.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A document could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The session store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TeamError {
    pub fn member_not_found(name: impl Into<String>) -> Self {
        TeamError::MemberNotFound(name.into())
    }

    pub fn session_not_found(id: SessionId) -> Self {
        TeamError::SessionNotFound(id)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        TeamError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TeamError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            TeamError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            TeamError::Validation(err) => err.code(),
            TeamError::Serialization(_) => ErrorCode::InternalError,
            TeamError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<serde_json::Error> for TeamError {
    fn from(err: serde_json::Error) -> Self {
        TeamError::Serialization(err.to_string())
    }
}

impl From<DomainError> for TeamError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => match err
                .details
                .get("session_id")
                .and_then(|id| id.parse().ok())
            {
                Some(id) => TeamError::SessionNotFound(id),
                None => TeamError::Storage(err.to_string()),
            },
            ErrorCode::MemberNotFound => TeamError::MemberNotFound(
                err.details.get("member").cloned().unwrap_or(err.message),
            ),
            code if code.is_validation() => TeamError::Validation(ValidationError::invalid_format(
                err.details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                err.message,
            )),
            _ => TeamError::Storage(err.to_string()),
        }
    }
}
