#[cfg(test)]
mod tests {
    use crate::domain::analysis::{CoveragePolicy, CoverageWeights, PhaseCoverage, PhaseTable};
    use crate::domain::dashboard::overview::TeamDashboard;
    use crate::domain::foundation::{Category, Tag};
    use crate::domain::team::{MemberProfile, ProfileMode, Roster};

    fn build(roster: &Roster, policy: CoveragePolicy) -> TeamDashboard {
        TeamDashboard::build(
            roster,
            &PhaseTable::standard(),
            policy,
            CoverageWeights::default(),
        )
    }

    #[test]
    fn test_dashboard_serializes_camel_case() {
        let dashboard = build(&Roster::default(), CoveragePolicy::WeightedMembers);
        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["memberCount"], 4);
        assert_eq!(json["mode"], "full");
        assert_eq!(json["coverage"]["policy"], "weighted_members");
        assert!(json["categoryColors"].is_array());
        assert!(json["memberColors"].is_array());
    }

    #[test]
    fn test_dashboard_uses_requested_policy() {
        for policy in CoveragePolicy::all() {
            let dashboard = build(&Roster::default(), *policy);
            assert_eq!(dashboard.coverage.policy(), *policy);
        }
    }

    #[test]
    fn test_dashboard_default_team_colors() {
        let dashboard = build(&Roster::default(), CoveragePolicy::AnyMatch);
        let colors: Vec<_> = dashboard.member_colors.iter().map(|c| c.color).collect();
        assert_eq!(colors, vec!["#FF7F50", "#87CEEB", "#DDA0DD", "#90EE90"]);
        assert_eq!(dashboard.category_colors.len(), 3);
    }

    #[test]
    fn test_dashboard_genius_only_shows_genius_color_only() {
        let dashboard = build(
            &Roster::default_team(ProfileMode::GeniusOnly),
            CoveragePolicy::GeniusCount,
        );
        assert_eq!(dashboard.category_colors.len(), 1);
        assert_eq!(dashboard.category_colors[0].category, Category::Genius);
        assert_eq!(dashboard.graph.edges.len(), 8);
    }

    #[test]
    fn test_dashboard_reports_overlaps() {
        let roster = Roster::new(ProfileMode::Full)
            .with_member(
                "Anne",
                MemberProfile::new([Tag::Galvanizing], [Tag::Galvanizing], Vec::<Tag>::new()),
            )
            .unwrap();
        let dashboard = build(&roster, CoveragePolicy::WeightedMembers);

        assert_eq!(dashboard.overlaps.len(), 1);
        assert_eq!(dashboard.overlaps[0].member.as_str(), "Anne");
        assert_eq!(dashboard.overlaps[0].tag, Tag::Galvanizing);
        assert_eq!(dashboard.graph.edges.len(), 2);
    }

    #[test]
    fn test_dashboard_handles_empty_roster() {
        let dashboard = build(&Roster::new(ProfileMode::Full), CoveragePolicy::GeniusCount);

        assert_eq!(dashboard.member_count, 0);
        assert!(dashboard.distribution.labels.is_empty());
        assert!(dashboard.member_colors.is_empty());
        assert!(dashboard.overlaps.is_empty());
        match dashboard.coverage {
            PhaseCoverage::GeniusCount(scores) => {
                assert_eq!(scores.len(), 5);
                assert!(scores.iter().all(|s| s.score == 0));
            }
            other => panic!("unexpected coverage {:?}", other),
        }
    }
}
