//! Relationship Graph Builder - member-to-tag edges for an external layout.
//!
//! Edges are kept per relation kind, so a member holding the same tag as
//! both Genius and Competency yields two edges rather than one edge whose
//! kind depends on drawing order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{Category, MemberName, Tag, ValidationError};
use crate::domain::team::Roster;

/// How parallel (member, tag) edges of different kinds are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Keep every edge.
    #[default]
    Multigraph,
    /// Fail on the first pair linked under two kinds.
    RejectParallel,
}

/// One member-tag relation.
///
/// `source` and `target` are node ids, so a renderer can join edges to
/// nodes without knowing how ids are formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEdge {
    pub source: String,
    pub target: String,
    pub member: MemberName,
    pub tag: Tag,
    pub kind: Category,
}

impl RelationEdge {
    pub fn new(member: MemberName, tag: Tag, kind: Category) -> Self {
        Self {
            source: member_node_id(&member),
            target: tag_node_id(tag),
            member,
            tag,
            kind,
        }
    }
}

/// Node kinds, drawn with different shapes by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Member,
    Tag,
}

/// A graph node. Ids carry a kind prefix (`member:Anne`, `tag:G`) so a
/// member named like a tag symbol never shares an id with the tag node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

impl GraphNode {
    pub fn member(name: &MemberName) -> Self {
        Self {
            id: member_node_id(name),
            label: name.to_string(),
            kind: NodeKind::Member,
        }
    }

    pub fn tag(tag: Tag) -> Self {
        Self {
            id: tag_node_id(tag),
            label: tag.symbol().to_string(),
            kind: NodeKind::Tag,
        }
    }
}

pub fn member_node_id(name: &MemberName) -> String {
    format!("member:{}", name)
}

pub fn tag_node_id(tag: Tag) -> String {
    format!("tag:{}", tag.symbol())
}

/// Nodes and edges, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<RelationEdge>,
}

impl RelationshipGraph {
    /// Edges of a single kind.
    pub fn edges_of(&self, kind: Category) -> impl Iterator<Item = &RelationEdge> + '_ {
        self.edges.iter().filter(move |e| e.kind == kind)
    }
}

/// Relationship graph functions.
pub struct RelationshipGraphBuilder;

impl RelationshipGraphBuilder {
    /// One edge per (member, category, tag), in roster order, then category
    /// order, then tag selection order.
    pub fn build_edges(roster: &Roster) -> Vec<RelationEdge> {
        let mut edges = Vec::new();
        for (name, profile) in roster.members() {
            for category in Category::all() {
                for tag in profile.category(*category).iter() {
                    edges.push(RelationEdge::new(name.clone(), tag, *category));
                }
            }
        }
        edges
    }

    /// Builds nodes (members, then all six tags) and edges.
    ///
    /// # Errors
    /// With `EdgePolicy::RejectParallel`, a member linked to one tag under two
    /// kinds fails with `ValidationError::ParallelRelation`.
    pub fn build(roster: &Roster, policy: EdgePolicy) -> Result<RelationshipGraph, ValidationError> {
        let graph = Self::multigraph(roster);

        if policy == EdgePolicy::RejectParallel {
            let mut seen: HashMap<(&MemberName, Tag), Category> = HashMap::new();
            for edge in &graph.edges {
                if let Some(first) = seen.insert((&edge.member, edge.tag), edge.kind) {
                    return Err(ValidationError::ParallelRelation {
                        member: edge.member.to_string(),
                        tag: edge.tag.to_string(),
                        first: first.to_string(),
                        second: edge.kind.to_string(),
                    });
                }
            }
        }

        Ok(graph)
    }

    /// Builds the graph keeping every parallel edge.
    pub fn multigraph(roster: &Roster) -> RelationshipGraph {
        let edges = Self::build_edges(roster);
        let nodes = roster
            .members()
            .map(|(name, _)| GraphNode::member(name))
            .chain(Tag::all().iter().map(|tag| GraphNode::tag(*tag)))
            .collect();

        RelationshipGraph { nodes, edges }
    }
}
