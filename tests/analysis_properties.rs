//! Property-based tests for the team analyzers.
//!
//! Rosters are generated with arbitrary tag sets per category, so the
//! same tag may appear in more than one category of a member.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

use team_genius::domain::analysis::{
    CoverageWeights, DistributionAnalyzer, PhaseCoverageAnalyzer, PhaseTable,
};
use team_genius::domain::foundation::{Category, MemberName, Tag};
use team_genius::domain::team::{MemberProfile, ProfileMode, Roster, TagSet};

// ============================================================================
// Strategies
// ============================================================================

fn tag_set() -> impl Strategy<Value = TagSet> {
    vec(select(Tag::all()), 0..6).prop_map(|tags| tags.into_iter().collect())
}

fn member_profile() -> impl Strategy<Value = MemberProfile> {
    (tag_set(), tag_set(), tag_set())
        .prop_map(|(genius, competency, frustration)| MemberProfile::new(genius, competency, frustration))
}

fn roster_from(profiles: Vec<MemberProfile>) -> Roster {
    profiles
        .into_iter()
        .enumerate()
        .try_fold(Roster::new(ProfileMode::Full), |roster, (i, profile)| {
            roster.with_member(format!("M{}", i), profile)
        })
        .unwrap()
}

fn roster() -> impl Strategy<Value = Roster> {
    vec(member_profile(), 0..8).prop_map(roster_from)
}

fn names(members: &[MemberName]) -> Vec<String> {
    members.iter().map(|m| m.as_str().to_string()).collect()
}

// ============================================================================
// Distribution
// ============================================================================

proptest! {
    #[test]
    fn category_counts_sum_to_total_assignments(roster in roster()) {
        for category in Category::all() {
            let counts = DistributionAnalyzer::count_by_category(&roster, *category);
            let expected: usize = roster
                .members()
                .map(|(_, profile)| profile.category(*category).len())
                .sum();

            prop_assert_eq!(counts.values().sum::<usize>(), expected);
            prop_assert!(counts.values().all(|count| *count > 0));
        }
    }

    #[test]
    fn tag_sets_never_hold_duplicates(set in tag_set()) {
        let mut seen = set.as_slice().to_vec();
        seen.sort_by_key(|tag| tag.symbol());
        seen.dedup();
        prop_assert_eq!(seen.len(), set.len());
    }
}

// ============================================================================
// Phase coverage
// ============================================================================

proptest! {
    #[test]
    fn genius_count_adds_tag_counts(roster in roster()) {
        let table = PhaseTable::standard();
        let counts = DistributionAnalyzer::count_by_category(&roster, Category::Genius);

        for (score, phase) in PhaseCoverageAnalyzer::genius_count(&roster, &table)
            .iter()
            .zip(table.phases())
        {
            let expected: usize = phase
                .tags()
                .iter()
                .map(|tag| counts.get(tag).copied().unwrap_or(0))
                .sum();
            prop_assert_eq!(score.phase.as_str(), phase.name());
            prop_assert_eq!(score.score, expected);
        }
    }

    #[test]
    fn weighted_members_prefers_genius_over_competency(roster in roster()) {
        let table = PhaseTable::standard();
        let weights = CoverageWeights::default();

        for (coverage, phase) in PhaseCoverageAnalyzer::weighted_members(&roster, &table, weights)
            .iter()
            .zip(table.phases())
        {
            let expected: Vec<(String, f64)> = roster
                .members()
                .map(|(name, profile)| {
                    let weight: f64 = phase
                        .tags()
                        .iter()
                        .map(|tag| {
                            if profile.genius().contains(*tag) {
                                1.0
                            } else if profile.competency().contains(*tag) {
                                0.5
                            } else {
                                0.0
                            }
                        })
                        .sum();
                    (name.as_str().to_string(), weight)
                })
                .filter(|(_, weight)| *weight > 0.0)
                .collect();
            let actual: Vec<(String, f64)> = coverage
                .contributions
                .iter()
                .map(|c| (c.member.as_str().to_string(), c.weight))
                .collect();

            prop_assert_eq!(actual, expected);
            prop_assert!(coverage.total >= 0.0);
        }
    }

    #[test]
    fn any_match_selects_members_with_a_required_genius(roster in roster()) {
        let table = PhaseTable::standard();
        let coverage = PhaseCoverageAnalyzer::any_match(&roster, &table);

        for (phase_members, phase) in coverage.phases.iter().zip(table.phases()) {
            let expected: Vec<String> = roster
                .members()
                .filter(|(_, profile)| phase.tags().iter().any(|tag| profile.genius().contains(*tag)))
                .map(|(name, _)| name.as_str().to_string())
                .collect();
            prop_assert_eq!(names(&phase_members.members), expected);
        }

        for name in &coverage.legend {
            prop_assert!(coverage.phases.iter().any(|p| p.members.contains(name)));
        }
    }

    #[test]
    fn any_match_membership_ignores_roster_order(profiles in vec(member_profile(), 0..8)) {
        let table = PhaseTable::standard();
        let forward = roster_from(profiles.clone());

        let mut reversed = Roster::new(ProfileMode::Full);
        for (i, profile) in profiles.into_iter().enumerate().rev() {
            reversed = reversed.with_member(format!("M{}", i), profile).unwrap();
        }

        let a = PhaseCoverageAnalyzer::any_match(&forward, &table);
        let b = PhaseCoverageAnalyzer::any_match(&reversed, &table);

        for (x, y) in a.phases.iter().zip(&b.phases) {
            let mut left = names(&x.members);
            let mut right = names(&y.members);
            left.sort();
            right.sort();
            prop_assert_eq!(left, right);
        }
    }
}

// ============================================================================
// Persistence
// ============================================================================

proptest! {
    #[test]
    fn full_roster_survives_document_round_trip(roster in roster()) {
        let json = roster.to_document().to_json_pretty().unwrap();
        let document = team_genius::domain::team::ProfileDocument::from_json(&json).unwrap();
        let restored = Roster::from_document(document).unwrap();

        prop_assert_eq!(restored, roster);
    }
}
