//! Tag enum representing the six Working Genius types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the six Working Genius types.
///
/// Serialized as its single-letter symbol. Parsing accepts the symbol or the
/// full name, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tag {
    Wonder,
    Invention,
    Discernment,
    Galvanizing,
    Enablement,
    Tenacity,
}

impl Tag {
    /// Returns all tags in canonical W-I-D-G-E-T order.
    pub fn all() -> &'static [Tag] {
        &[
            Tag::Wonder,
            Tag::Invention,
            Tag::Discernment,
            Tag::Galvanizing,
            Tag::Enablement,
            Tag::Tenacity,
        ]
    }

    /// Returns all tags ordered by symbol (D, E, G, I, T, W).
    pub fn all_by_symbol() -> Vec<Tag> {
        let mut tags = Self::all().to_vec();
        tags.sort_by_key(|t| t.symbol());
        tags
    }

    /// Returns the single-letter symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Tag::Wonder => "W",
            Tag::Invention => "I",
            Tag::Discernment => "D",
            Tag::Galvanizing => "G",
            Tag::Enablement => "E",
            Tag::Tenacity => "T",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tag::Wonder => "Wonder",
            Tag::Invention => "Invention",
            Tag::Discernment => "Discernment",
            Tag::Galvanizing => "Galvanizing",
            Tag::Enablement => "Enablement",
            Tag::Tenacity => "Tenacity",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Tag::all()
            .iter()
            .find(|t| {
                t.symbol().eq_ignore_ascii_case(trimmed)
                    || t.display_name().eq_ignore_ascii_case(trimmed)
            })
            .copied()
            .ok_or_else(|| ValidationError::unknown_tag(s))
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.symbol().to_string()
    }
}
