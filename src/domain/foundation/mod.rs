//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the team profile domain.

mod category;
mod errors;
mod ids;
mod member_name;
mod tag;
mod timestamp;

pub use category::Category;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use member_name::MemberName;
pub use tag::Tag;
pub use timestamp::Timestamp;
