//! MemberProfile - one member's Genius, Competency and Frustration sets.

use serde::{Deserialize, Serialize};

use super::TagSet;
use crate::domain::foundation::{Category, Tag};

/// A tag that a member placed in two categories at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverlap {
    pub tag: Tag,
    pub first: Category,
    pub second: Category,
}

/// A member's self-reported Working Genius profile.
///
/// Categories are not required to be disjoint. Use [`MemberProfile::overlaps`]
/// to find tags that were placed in more than one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    #[serde(rename = "Genius", default)]
    genius: TagSet,
    #[serde(rename = "Competency", default)]
    competency: TagSet,
    #[serde(rename = "Frustration", default)]
    frustration: TagSet,
}

impl MemberProfile {
    pub fn new(
        genius: impl Into<TagSet>,
        competency: impl Into<TagSet>,
        frustration: impl Into<TagSet>,
    ) -> Self {
        Self {
            genius: genius.into(),
            competency: competency.into(),
            frustration: frustration.into(),
        }
    }

    /// Creates a profile that only records geniuses.
    pub fn genius_only(genius: impl Into<TagSet>) -> Self {
        Self {
            genius: genius.into(),
            ..Default::default()
        }
    }

    pub fn genius(&self) -> &TagSet {
        &self.genius
    }

    pub fn competency(&self) -> &TagSet {
        &self.competency
    }

    pub fn frustration(&self) -> &TagSet {
        &self.frustration
    }

    /// Returns the set for a category.
    pub fn category(&self, category: Category) -> &TagSet {
        match category {
            Category::Genius => &self.genius,
            Category::Competency => &self.competency,
            Category::Frustration => &self.frustration,
        }
    }

    /// Replaces the set for a category.
    pub fn set_category(&mut self, category: Category, tags: TagSet) {
        match category {
            Category::Genius => self.genius = tags,
            Category::Competency => self.competency = tags,
            Category::Frustration => self.frustration = tags,
        }
    }

    /// True if only the genius set has tags.
    pub fn is_genius_only(&self) -> bool {
        self.competency.is_empty() && self.frustration.is_empty()
    }

    /// Number of (category, tag) pairs across all three sets.
    pub fn relation_count(&self) -> usize {
        self.genius.len() + self.competency.len() + self.frustration.len()
    }

    /// Lists tags that appear in more than one category.
    ///
    /// Pairs are reported in canonical category order, tags in the order of
    /// the earlier category.
    pub fn overlaps(&self) -> Vec<CategoryOverlap> {
        let categories = Category::all();
        let mut overlaps = Vec::new();
        for (i, first) in categories.iter().enumerate() {
            for second in &categories[i + 1..] {
                for tag in self.category(*first).iter() {
                    if self.category(*second).contains(tag) {
                        overlaps.push(CategoryOverlap {
                            tag,
                            first: *first,
                            second: *second,
                        });
                    }
                }
            }
        }
        overlaps
    }
}
