//! TagSet - unique tags in selection order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Tag, ValidationError};

/// A set of tags that remembers the order they were selected in.
///
/// Duplicates are dropped on construction, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses symbols or names into a set, rejecting anything outside the alphabet.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, ValidationError> {
        symbols
            .iter()
            .map(|s| s.as_ref().parse::<Tag>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }

    /// Appends a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes a tag. Returns false if it was absent.
    pub fn remove(&mut self, tag: Tag) -> bool {
        let before = self.0.len();
        self.0.retain(|t| *t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    /// True if any of `tags` is in the set.
    pub fn intersects(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.contains(*t))
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the tags as a slice, in selection order.
    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    /// Returns the symbols in selection order.
    pub fn symbols(&self) -> Vec<String> {
        self.0.iter().map(|t| t.symbol().to_string()).collect()
    }

    /// Compares membership, ignoring order.
    pub fn same_tags(&self, other: &TagSet) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}
