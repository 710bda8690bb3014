//! Analysis Module - Pure domain services over a roster.
//!
//! # Components
//!
//! - `DistributionAnalyzer` - per-category tag counts and chart label axis
//! - `PhaseTable` - project phases and the tags each needs
//! - `PhaseCoverageAnalyzer` - phase coverage under three named policies
//! - `RelationshipGraphBuilder` - member/tag edges for an external layout
//!
//! All functions are pure and total over a valid roster: an empty roster or
//! empty tag sets give empty or zero results, never an error.

mod coverage;
mod distribution;
mod phase_table;
mod relationship_graph;

pub use coverage::{
    AnyMatchCoverage, CoveragePolicy, CoverageWeights, MemberContribution, PhaseCoverage,
    PhaseCoverageAnalyzer, PhaseMembers, PhaseScore, WeightedPhaseCoverage,
};
pub use distribution::{CategorySeries, DistributionAnalyzer, LabelAxis, TagDistribution};
pub use phase_table::{PhaseRequirement, PhaseTable};
pub use relationship_graph::{
    member_node_id, tag_node_id, EdgePolicy, GraphNode, NodeKind, RelationEdge, RelationshipGraph,
    RelationshipGraphBuilder,
};
