//! Category enum for the three ways a member relates to a tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Genius, Competency or Frustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Genius,
    Competency,
    Frustration,
}

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[Category::Genius, Category::Competency, Category::Frustration]
    }

    /// Returns the display name, also used as the export key.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Genius => "Genius",
            Category::Competency => "Competency",
            Category::Frustration => "Frustration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genius" | "geniuses" => Ok(Category::Genius),
            "competency" | "competencies" => Ok(Category::Competency),
            "frustration" | "frustrations" => Ok(Category::Frustration),
            _ => Err(ValidationError::invalid_format(
                "category",
                format!("'{}' is not one of Genius, Competency, Frustration", s),
            )),
        }
    }
}
