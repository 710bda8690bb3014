//! Distribution Analyzer - tag frequency per category.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{Category, Tag};
use crate::domain::team::Roster;

/// Which tags form the x-axis of a distribution chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAxis {
    /// Only tags that appear in at least one category.
    #[default]
    Present,
    /// All six tags.
    FullAlphabet,
}

/// Counts for one category, aligned with [`TagDistribution::labels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    pub category: Category,
    pub counts: Vec<usize>,
}

/// Grouped-bar data: one label per tag, one series per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDistribution {
    pub labels: Vec<Tag>,
    pub series: Vec<CategorySeries>,
}

impl TagDistribution {
    /// Series for a category.
    pub fn series_for(&self, category: Category) -> Option<&CategorySeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Tag frequency functions.
pub struct DistributionAnalyzer;

impl DistributionAnalyzer {
    /// Counts how many members hold each tag in a category.
    ///
    /// Tags nobody holds in this category are omitted.
    pub fn count_by_category(roster: &Roster, category: Category) -> BTreeMap<Tag, usize> {
        let mut counts = BTreeMap::new();
        for (_, profile) in roster.members() {
            for tag in profile.category(category).iter() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Tags for the chart axis, ordered by symbol.
    pub fn label_axis(roster: &Roster, axis: LabelAxis) -> Vec<Tag> {
        match axis {
            LabelAxis::FullAlphabet => Tag::all_by_symbol(),
            LabelAxis::Present => {
                let mut present = BTreeSet::new();
                for (_, profile) in roster.members() {
                    for category in Category::all() {
                        present.extend(profile.category(*category).iter());
                    }
                }
                let mut labels: Vec<Tag> = present.into_iter().collect();
                labels.sort_by_key(|t| t.symbol());
                labels
            }
        }
    }

    /// Builds grouped-bar data for all three categories.
    ///
    /// # Edge Cases
    /// - Empty roster: no labels, three empty series
    /// - Tag on the axis but absent from a category: count 0
    pub fn distribution(roster: &Roster, axis: LabelAxis) -> TagDistribution {
        let labels = Self::label_axis(roster, axis);
        let series = Category::all()
            .iter()
            .map(|category| {
                let counts = Self::count_by_category(roster, *category);
                CategorySeries {
                    category: *category,
                    counts: labels
                        .iter()
                        .map(|tag| counts.get(tag).copied().unwrap_or(0))
                        .collect(),
                }
            })
            .collect();

        TagDistribution { labels, series }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{MemberProfile, ProfileMode};

    fn anne_and_molly() -> Roster {
        Roster::new(ProfileMode::Full)
            .with_member(
                "Anne",
                MemberProfile::new(
                    [Tag::Galvanizing, Tag::Tenacity],
                    [Tag::Invention, Tag::Discernment],
                    [Tag::Wonder, Tag::Enablement],
                ),
            )
            .unwrap()
            .with_member(
                "Molly",
                MemberProfile::new(
                    [Tag::Invention, Tag::Discernment],
                    [Tag::Galvanizing, Tag::Enablement],
                    [Tag::Wonder, Tag::Tenacity],
                ),
            )
            .unwrap()
    }

    #[test]
    fn count_genius_for_two_members() {
        let counts = DistributionAnalyzer::count_by_category(&anne_and_molly(), Category::Genius);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get(&Tag::Galvanizing), Some(&1));
        assert_eq!(counts.get(&Tag::Tenacity), Some(&1));
        assert_eq!(counts.get(&Tag::Invention), Some(&1));
        assert_eq!(counts.get(&Tag::Discernment), Some(&1));
        assert_eq!(counts.get(&Tag::Wonder), None);
    }

    #[test]
    fn shared_tag_counts_once_per_member() {
        let counts =
            DistributionAnalyzer::count_by_category(&anne_and_molly(), Category::Frustration);
        assert_eq!(counts.get(&Tag::Wonder), Some(&2));
    }

    #[test]
    fn default_team_genius_counts() {
        let roster = Roster::default_team(ProfileMode::Full);
        let counts = DistributionAnalyzer::count_by_category(&roster, Category::Genius);
        assert_eq!(counts.get(&Tag::Invention), Some(&2));
        assert_eq!(counts.get(&Tag::Discernment), Some(&2));
        assert_eq!(counts.get(&Tag::Galvanizing), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 8);
    }

    #[test]
    fn empty_roster_has_no_counts() {
        let roster = Roster::new(ProfileMode::Full);
        for category in Category::all() {
            assert!(DistributionAnalyzer::count_by_category(&roster, *category).is_empty());
        }
        let dist = DistributionAnalyzer::distribution(&roster, LabelAxis::Present);
        assert!(dist.labels.is_empty());
        assert_eq!(dist.series.len(), 3);
        assert!(dist.series.iter().all(|s| s.counts.is_empty()));
    }

    #[test]
    fn present_axis_is_union_sorted_by_symbol() {
        let roster = Roster::new(ProfileMode::Full)
            .with_member(
                "Solo",
                MemberProfile::new([Tag::Wonder], [Tag::Enablement], Vec::<Tag>::new()),
            )
            .unwrap();
        assert_eq!(
            DistributionAnalyzer::label_axis(&roster, LabelAxis::Present),
            vec![Tag::Enablement, Tag::Wonder]
        );
    }

    #[test]
    fn full_alphabet_axis_zero_fills() {
        let roster = Roster::new(ProfileMode::Full)
            .with_member("Solo", MemberProfile::genius_only([Tag::Tenacity]))
            .unwrap();
        let dist = DistributionAnalyzer::distribution(&roster, LabelAxis::FullAlphabet);
        assert_eq!(dist.labels.len(), 6);
        let genius = dist.series_for(Category::Genius).unwrap();
        assert_eq!(genius.counts, vec![0, 0, 0, 0, 1, 0]);
        let competency = dist.series_for(Category::Competency).unwrap();
        assert_eq!(competency.counts.iter().sum::<usize>(), 0);
    }

    #[test]
    fn distribution_aligns_series_with_labels() {
        let dist = DistributionAnalyzer::distribution(
            &Roster::default_team(ProfileMode::Full),
            LabelAxis::Present,
        );
        // Labels: D E G I T W
        assert_eq!(dist.labels, Tag::all_by_symbol());
        let genius = dist.series_for(Category::Genius).unwrap();
        assert_eq!(genius.counts, vec![2, 1, 1, 2, 1, 1]);
        let frustration = dist.series_for(Category::Frustration).unwrap();
        assert_eq!(frustration.counts, vec![0, 2, 1, 0, 2, 3]);
    }
}
