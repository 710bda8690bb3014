use serde::Serialize;

use super::ColorPalette;
use crate::domain::analysis::{
    CoveragePolicy, CoverageWeights, DistributionAnalyzer, LabelAxis, PhaseCoverage,
    PhaseCoverageAnalyzer, PhaseTable, RelationshipGraph, RelationshipGraphBuilder,
    TagDistribution,
};
use crate::domain::foundation::{Category, MemberName, Tag};
use crate::domain::team::{ProfileMode, Roster};

/// Everything one render pass of the team dashboard needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDashboard {
    pub mode: ProfileMode,
    pub member_count: usize,

    /// Grouped bar chart, present-tag axis
    pub distribution: TagDistribution,

    /// Phase chart for the requested policy
    pub coverage: PhaseCoverage,

    /// Member/tag network, parallel edges kept
    pub graph: RelationshipGraph,

    pub category_colors: Vec<CategoryColor>,
    pub member_colors: Vec<MemberColor>,

    /// Tags a member placed in two categories
    pub overlaps: Vec<MemberOverlap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColor {
    pub category: Category,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberColor {
    pub member: MemberName,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOverlap {
    pub member: MemberName,
    pub tag: Tag,
    pub first: Category,
    pub second: Category,
}

impl TeamDashboard {
    pub fn build(
        roster: &Roster,
        table: &PhaseTable,
        policy: CoveragePolicy,
        weights: CoverageWeights,
    ) -> Self {
        let category_colors = Category::all()
            .iter()
            .filter(|category| roster.mode().tracks(**category))
            .map(|category| CategoryColor {
                category: *category,
                color: ColorPalette::category_color(*category),
            })
            .collect();

        let member_colors = roster
            .members()
            .enumerate()
            .map(|(position, (name, _))| MemberColor {
                member: name.clone(),
                color: ColorPalette::member_color(name.as_str(), position),
            })
            .collect();

        let overlaps = roster
            .members()
            .flat_map(|(name, profile)| {
                profile.overlaps().into_iter().map(move |o| MemberOverlap {
                    member: name.clone(),
                    tag: o.tag,
                    first: o.first,
                    second: o.second,
                })
            })
            .collect();

        Self {
            mode: roster.mode(),
            member_count: roster.len(),
            distribution: DistributionAnalyzer::distribution(roster, LabelAxis::Present),
            coverage: PhaseCoverageAnalyzer::analyze(policy, roster, table, weights),
            graph: RelationshipGraphBuilder::multigraph(roster),
            category_colors,
            member_colors,
            overlaps,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
