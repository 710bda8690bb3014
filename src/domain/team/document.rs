//! ProfileDocument - the plain nested form of a roster used for JSON export.
//!
//! Two shapes are accepted:
//!
//! ```json
//! { "Anne": { "Genius": ["G", "T"], "Competency": ["I", "D"], "Frustration": ["W", "E"] } }
//! { "Anne": ["G", "T"] }
//! ```
//!
//! Member order is the order of the map in the source text. Tags are kept as
//! raw strings so that validation happens when the document becomes a roster.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Per-category tag lists for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLists {
    #[serde(rename = "Genius", default)]
    pub genius: Vec<String>,
    #[serde(rename = "Competency", default)]
    pub competency: Vec<String>,
    #[serde(rename = "Frustration", default)]
    pub frustration: Vec<String>,
}

/// One member's entry in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberEntry {
    /// A flat genius list.
    GeniusOnly(Vec<String>),
    /// All three categories.
    Categorised(CategoryLists),
}

/// Ordered mapping from member name to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDocument {
    entries: Vec<(String, MemberEntry)>,
}

impl ProfileDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, keeping insertion order.
    pub fn push(&mut self, member: impl Into<String>, entry: MemberEntry) {
        self.entries.push((member.into(), entry));
    }

    pub fn entries(&self) -> &[(String, MemberEntry)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, MemberEntry)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Serialize for ProfileDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (member, entry) in &self.entries {
            map.serialize_entry(member, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProfileDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = ProfileDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of member name to profile")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((member, entry)) = access.next_entry::<String, MemberEntry>()? {
                    entries.push((member, entry));
                }
                Ok(ProfileDocument { entries })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
