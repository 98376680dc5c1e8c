//! Graph export: full JSON snapshots and flat triples.
//!
//! Snapshots carry every table plus counts, for handing the graph to a
//! front end or another tool. Triples flatten each edge to
//! (subject, predicate, object, strength) for downstream processing.

use crate::knowledge_graph::StrategyGraph;
use serde::Serialize;
use stratgraph_core::path::LearningPath;
use stratgraph_core::theme::StrategicTheme;
use stratgraph_core::topology::RelationshipGraph;
use stratgraph_core::types::{KnowledgeEdge, Locale};

/// Export metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_id: String,
    pub version: String,
    pub edge_count: usize,
    pub entity_count: usize,
    pub theme_count: usize,
    pub path_count: usize,
}

/// A full serializable snapshot of the graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphExport<'a> {
    pub metadata: ExportMetadata,
    pub edges: &'a [KnowledgeEdge],
    pub themes: &'a [StrategicTheme],
    pub paths: &'a [LearningPath],
}

pub fn export_graph(graph: &StrategyGraph) -> GraphExport<'_> {
    let store = graph.edge_store();
    GraphExport {
        metadata: ExportMetadata {
            export_id: uuid::Uuid::new_v4().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            edge_count: store.edge_count(),
            entity_count: store.entity_count(),
            theme_count: graph.theme_catalog().len(),
            path_count: graph.learning_path_catalog().len(),
        },
        edges: store.all_edges(),
        themes: graph.theme_catalog().as_slice(),
        paths: graph.learning_path_catalog().as_slice(),
    }
}

/// A knowledge graph triple with its strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub strength: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Export all edges as triples, strongest first.
///
/// Equal strengths keep declaration order.
pub fn export_triples(graph: &StrategyGraph, locale: Locale) -> Vec<StrengthTriple> {
    let mut triples: Vec<StrengthTriple> = graph
        .edge_store()
        .all_edges()
        .iter()
        .map(|edge| StrengthTriple {
            subject: edge.from.to_string(),
            predicate: edge.relationship.to_string(),
            object: edge.to.to_string(),
            strength: edge.strength.value(),
            context: edge.context.as_ref().map(|c| c.get(locale).to_string()),
        })
        .collect();

    triples.sort_by(|a, b| b.strength.cmp(&a.strength));
    triples
}
