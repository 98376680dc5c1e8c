//! Graph analytics: aggregate counts and hub ranking.
//!
//! Computes two views over the edge store:
//! - Stats: edge, theme, path and step totals plus a per-relationship breakdown
//! - Hubs: unweighted degree centrality per endpoint ("most connected")

use crate::paths::LearningPathCatalog;
use crate::themes::ThemeCatalog;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use stratgraph_core::topology::RelationshipGraph;
use stratgraph_core::types::{EntityRef, EntityType, Relationship};

/// Aggregate counts over the whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraphStats {
    pub total_edges: usize,
    pub total_themes: usize,
    pub total_paths: usize,
    /// Sum of step counts over every learning path.
    pub total_steps: usize,
    /// Holds an entry for all ten relationships, zero when unused.
    pub edges_by_type: BTreeMap<Relationship, usize>,
}

impl KnowledgeGraphStats {
    pub fn edges_of(&self, relationship: Relationship) -> usize {
        self.edges_by_type.get(&relationship).copied().unwrap_or(0)
    }
}

/// One entity and how many edges touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHub {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: String,
    /// Edges touching this entity; a self-loop counts twice.
    pub connection_count: usize,
    /// Sum of the strengths of those same edges.
    pub total_strength: u32,
}

impl ContentHub {
    pub fn entity(&self) -> EntityRef {
        EntityRef::new(self.entity_type, self.id.clone())
    }
}

pub fn knowledge_graph_stats<G>(
    graph: &G,
    themes: &ThemeCatalog,
    paths: &LearningPathCatalog,
) -> KnowledgeGraphStats
where
    G: RelationshipGraph + ?Sized,
{
    let mut edges_by_type: BTreeMap<Relationship, usize> =
        Relationship::ALL.iter().map(|r| (*r, 0)).collect();
    for edge in graph.all_edges() {
        *edges_by_type.entry(edge.relationship).or_insert(0) += 1;
    }

    KnowledgeGraphStats {
        total_edges: graph.edge_count(),
        total_themes: themes.len(),
        total_paths: paths.len(),
        total_steps: paths.total_steps(),
        edges_by_type,
    }
}

/// Degree per distinct endpoint, in first-encounter order (`from` before
/// `to`, edges in declaration order).
fn tally_degrees<G>(graph: &G) -> Vec<ContentHub>
where
    G: RelationshipGraph + ?Sized,
{
    let mut hubs: Vec<ContentHub> = Vec::new();
    let mut position: HashMap<&EntityRef, usize> = HashMap::new();

    for edge in graph.all_edges() {
        for endpoint in [&edge.from, &edge.to] {
            let slot = *position.entry(endpoint).or_insert_with(|| {
                hubs.push(ContentHub {
                    entity_type: endpoint.entity_type,
                    id: endpoint.id.clone(),
                    connection_count: 0,
                    total_strength: 0,
                });
                hubs.len() - 1
            });
            hubs[slot].connection_count += 1;
            hubs[slot].total_strength += u32::from(edge.strength.value());
        }
    }

    hubs
}

/// Entities ranked by unweighted degree, most connected first.
///
/// Strength is ignored for ranking. Ties keep first-encounter order.
pub fn content_hubs<G>(graph: &G) -> Vec<ContentHub>
where
    G: RelationshipGraph + ?Sized,
{
    let mut hubs = tally_degrees(graph);
    hubs.sort_by(|a, b| b.connection_count.cmp(&a.connection_count));
    hubs
}

/// Entities ranked by the summed strength of their edges.
///
/// Ties keep first-encounter order, same as [`content_hubs`].
pub fn content_hubs_by_strength<G>(graph: &G) -> Vec<ContentHub>
where
    G: RelationshipGraph + ?Sized,
{
    let mut hubs = tally_degrees(graph);
    hubs.sort_by(|a, b| b.total_strength.cmp(&a.total_strength));
    hubs
}
