//! MemberName value object.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ValidationError;

/// A team member's display name. Never empty, surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberName(String);

impl MemberName {
    /// Creates a validated member name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("member"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a compile-time name that is known to be non-blank.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MemberName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MemberName> for String {
    fn from(name: MemberName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = MemberName::new("  Molly ").unwrap();
        assert_eq!(name.as_str(), "Molly");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            MemberName::new("   ").unwrap_err(),
            ValidationError::empty_field("member")
        );
    }

    #[test]
    fn deserializes_through_validation() {
        assert!(serde_json::from_str::<MemberName>("\"Kris\"").is_ok());
        assert!(serde_json::from_str::<MemberName>("\"\"").is_err());
    }
}
