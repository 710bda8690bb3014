//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction or roster edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("'{value}' is not a Working Genius tag (expected one of W, I, D, G, E, T)")]
    UnknownTag { value: String },

    #[error("Member '{name}' appears more than once in the roster")]
    DuplicateMember { name: String },

    #[error("Category '{category}' is not tracked in genius-only mode")]
    CategoryNotTracked { category: String },

    #[error("Invalid phase table: {reason}")]
    InvalidPhaseTable { reason: String },

    #[error("Member '{member}' is linked to tag {tag} as both {first} and {second}")]
    ParallelRelation {
        member: String,
        tag: String,
        first: String,
        second: String,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an unknown tag validation error.
    pub fn unknown_tag(value: impl Into<String>) -> Self {
        ValidationError::UnknownTag { value: value.into() }
    }

    /// Creates a duplicate member validation error.
    pub fn duplicate_member(name: impl Into<String>) -> Self {
        ValidationError::DuplicateMember { name: name.into() }
    }

    /// Creates an untracked category validation error.
    pub fn category_not_tracked(category: impl Into<String>) -> Self {
        ValidationError::CategoryNotTracked {
            category: category.into(),
        }
    }

    /// Creates an invalid phase table validation error.
    pub fn invalid_phase_table(reason: impl Into<String>) -> Self {
        ValidationError::InvalidPhaseTable {
            reason: reason.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::UnknownTag { .. } => ErrorCode::UnknownTag,
            ValidationError::DuplicateMember { .. } => ErrorCode::DuplicateMember,
            ValidationError::CategoryNotTracked { .. } => ErrorCode::CategoryNotTracked,
            ValidationError::InvalidPhaseTable { .. } => ErrorCode::InvalidPhaseTable,
            ValidationError::ParallelRelation { .. } => ErrorCode::ParallelRelation,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    UnknownTag,
    DuplicateMember,
    CategoryNotTracked,
    InvalidPhaseTable,
    ParallelRelation,
    InvalidFormat,

    // Not found errors
    SessionNotFound,
    MemberNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for codes caused by bad caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::UnknownTag
                | ErrorCode::DuplicateMember
                | ErrorCode::CategoryNotTracked
                | ErrorCode::InvalidPhaseTable
                | ErrorCode::ParallelRelation
                | ErrorCode::InvalidFormat
        )
    }

    /// Returns true for codes caused by a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorCode::SessionNotFound | ErrorCode::MemberNotFound)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::UnknownTag => "UNKNOWN_TAG",
            ErrorCode::DuplicateMember => "DUPLICATE_MEMBER",
            ErrorCode::CategoryNotTracked => "CATEGORY_NOT_TRACKED",
            ErrorCode::InvalidPhaseTable => "INVALID_PHASE_TABLE",
            ErrorCode::ParallelRelation => "PARALLEL_RELATION",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Ports report failures with this type; module-specific errors convert
/// from it at the application boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
