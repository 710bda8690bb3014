//! Phase Coverage Analyzer - how well the roster staffs each project phase.
//!
//! Three policies are supported because they answer different questions and
//! give different numbers for the same roster:
//!
//! - `GeniusCount` - sum of genius counts for the phase's tags (integer)
//! - `WeightedMembers` - per-member weight, genius 1.0 and competency 0.5 per tag
//! - `AnyMatch` - members with at least one matching genius
//!
//! None of the policies read the frustration set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DistributionAnalyzer, PhaseTable};
use crate::domain::foundation::{Category, MemberName, ValidationError};
use crate::domain::team::Roster;

/// Named coverage strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    GeniusCount,
    #[default]
    WeightedMembers,
    AnyMatch,
}

impl CoveragePolicy {
    pub fn all() -> &'static [CoveragePolicy] {
        &[
            CoveragePolicy::GeniusCount,
            CoveragePolicy::WeightedMembers,
            CoveragePolicy::AnyMatch,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoveragePolicy::GeniusCount => "genius_count",
            CoveragePolicy::WeightedMembers => "weighted_members",
            CoveragePolicy::AnyMatch => "any_match",
        }
    }
}

impl fmt::Display for CoveragePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CoveragePolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CoveragePolicy::all()
            .iter()
            .find(|p| p.as_str() == normalized)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "policy",
                    format!("'{}' is not one of genius_count, weighted_members, any_match", s),
                )
            })
    }
}

/// Per-tag weights for the weighted policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageWeights {
    pub genius: f64,
    pub competency: f64,
}

impl CoverageWeights {
    pub fn new(genius: f64, competency: f64) -> Result<Self, ValidationError> {
        for (field, value) in [("genius_weight", genius), ("competency_weight", competency)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("weight must be a non-negative number, got {}", value),
                ));
            }
        }
        Ok(Self { genius, competency })
    }
}

impl Default for CoverageWeights {
    fn default() -> Self {
        Self {
            genius: 1.0,
            competency: 0.5,
        }
    }
}

/// Policy A result for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseScore {
    pub phase: String,
    pub score: usize,
}

/// One member's stacked segment in a weighted phase bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberContribution {
    pub member: MemberName,
    pub weight: f64,
}

/// Policy B result for one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedPhaseCoverage {
    pub phase: String,
    /// Members with weight > 0, in roster order.
    pub contributions: Vec<MemberContribution>,
    pub total: f64,
}

/// Policy C result for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseMembers {
    pub phase: String,
    /// Qualifying members, in roster order.
    pub members: Vec<MemberName>,
}

/// Policy C result for the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyMatchCoverage {
    pub phases: Vec<PhaseMembers>,
    /// Every member that qualifies for some phase, in roster order.
    pub legend: Vec<MemberName>,
}

/// Result of [`PhaseCoverageAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "policy", content = "result", rename_all = "snake_case")]
pub enum PhaseCoverage {
    GeniusCount(Vec<PhaseScore>),
    WeightedMembers(Vec<WeightedPhaseCoverage>),
    AnyMatch(AnyMatchCoverage),
}

impl PhaseCoverage {
    pub fn policy(&self) -> CoveragePolicy {
        match self {
            PhaseCoverage::GeniusCount(_) => CoveragePolicy::GeniusCount,
            PhaseCoverage::WeightedMembers(_) => CoveragePolicy::WeightedMembers,
            PhaseCoverage::AnyMatch(_) => CoveragePolicy::AnyMatch,
        }
    }
}

/// Phase coverage functions.
pub struct PhaseCoverageAnalyzer;

impl PhaseCoverageAnalyzer {
    /// Runs the chosen policy.
    pub fn analyze(
        policy: CoveragePolicy,
        roster: &Roster,
        table: &PhaseTable,
        weights: CoverageWeights,
    ) -> PhaseCoverage {
        match policy {
            CoveragePolicy::GeniusCount => {
                PhaseCoverage::GeniusCount(Self::genius_count(roster, table))
            }
            CoveragePolicy::WeightedMembers => {
                PhaseCoverage::WeightedMembers(Self::weighted_members(roster, table, weights))
            }
            CoveragePolicy::AnyMatch => PhaseCoverage::AnyMatch(Self::any_match(roster, table)),
        }
    }

    /// Policy A: score = Σ genius count of each required tag.
    ///
    /// Each phase reads the same counts, so a tag shared by two phases adds
    /// to both independently.
    pub fn genius_count(roster: &Roster, table: &PhaseTable) -> Vec<PhaseScore> {
        let counts = DistributionAnalyzer::count_by_category(roster, Category::Genius);
        table
            .phases()
            .iter()
            .map(|phase| PhaseScore {
                phase: phase.name().to_string(),
                score: phase
                    .tags()
                    .iter()
                    .map(|tag| counts.get(tag).copied().unwrap_or(0))
                    .sum(),
            })
            .collect()
    }

    /// Policy B: per member, Σ over required tags of the genius weight if the
    /// tag is a genius, else the competency weight if it is a competency.
    ///
    /// Per-member weight is not capped. Members with weight 0 are left out.
    pub fn weighted_members(
        roster: &Roster,
        table: &PhaseTable,
        weights: CoverageWeights,
    ) -> Vec<WeightedPhaseCoverage> {
        table
            .phases()
            .iter()
            .map(|phase| {
                let contributions: Vec<MemberContribution> = roster
                    .members()
                    .filter_map(|(name, profile)| {
                        let weight: f64 = phase
                            .tags()
                            .iter()
                            .map(|tag| {
                                if profile.genius().contains(*tag) {
                                    weights.genius
                                } else if profile.competency().contains(*tag) {
                                    weights.competency
                                } else {
                                    0.0
                                }
                            })
                            .sum();
                        (weight > 0.0).then(|| MemberContribution {
                            member: name.clone(),
                            weight,
                        })
                    })
                    .collect();
                let total = contributions.iter().map(|c| c.weight).sum();
                WeightedPhaseCoverage {
                    phase: phase.name().to_string(),
                    contributions,
                    total,
                }
            })
            .collect()
    }

    /// Policy C: members whose genius set meets any required tag.
    pub fn any_match(roster: &Roster, table: &PhaseTable) -> AnyMatchCoverage {
        let phases: Vec<PhaseMembers> = table
            .phases()
            .iter()
            .map(|phase| PhaseMembers {
                phase: phase.name().to_string(),
                members: roster
                    .members()
                    .filter(|(_, profile)| profile.genius().intersects(phase.tags()))
                    .map(|(name, _)| name.clone())
                    .collect(),
            })
            .collect();

        let legend = roster
            .members()
            .map(|(name, _)| name)
            .filter(|name| phases.iter().any(|p| p.members.contains(*name)))
            .cloned()
            .collect();

        AnyMatchCoverage { phases, legend }
    }
}
