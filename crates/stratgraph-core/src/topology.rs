//! Topology: the relationship structure of the knowledge graph.
//!
//! Entities are nodes, knowledge edges are the only structure. The graph
//! is read-only once built; every query is a total function and reports
//! missing data as an empty result rather than an error.

use crate::types::*;

/// Read access to a store of knowledge edges.
///
/// This is a trait rather than a concrete type so that callers can swap
/// the indexed store for a plain edge list (or a test double).
pub trait RelationshipGraph {
    /// Every edge in declaration order.
    fn all_edges(&self) -> &[KnowledgeEdge];

    /// Every edge whose `from` or `to` is exactly `(entity_type, id)`,
    /// in declaration order.
    fn edges_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&KnowledgeEdge>;

    /// The opposite endpoint of each edge touching `(entity_type, id)`.
    ///
    /// One row per matching edge: a neighbor reached through two edges
    /// appears twice.
    fn related_content(&self, entity_type: EntityType, id: &str) -> Vec<RelatedContent> {
        self.edges_for_content(entity_type, id)
            .into_iter()
            .map(|edge| {
                let other = edge.other_endpoint(entity_type, id);
                RelatedContent {
                    entity_type: other.entity_type,
                    id: other.id.clone(),
                    relationship: edge.relationship,
                    strength: edge.strength,
                }
            })
            .collect()
    }

    /// Edges of one relationship type, in declaration order.
    fn edges_by_relationship(&self, relationship: Relationship) -> Vec<&KnowledgeEdge> {
        self.all_edges()
            .iter()
            .filter(|e| e.relationship == relationship)
            .collect()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.all_edges().len()
    }
}

/// The unindexed form: a plain edge list answers queries by linear scan.
impl RelationshipGraph for [KnowledgeEdge] {
    fn all_edges(&self) -> &[KnowledgeEdge] {
        self
    }

    fn edges_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&KnowledgeEdge> {
        self.iter().filter(|e| e.touches(entity_type, id)).collect()
    }
}
