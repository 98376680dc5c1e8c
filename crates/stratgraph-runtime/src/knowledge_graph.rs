//! The strategy knowledge graph: edges, themes and learning paths together.
//!
//! Built once from a [`Dataset`] and immutable afterwards. Every query is a
//! pure read, so a single instance can be shared across threads freely.

use crate::analytics::{self, ContentHub, KnowledgeGraphStats};
use crate::dataset::Dataset;
use crate::edge_store::{EdgeStore, Neighbor};
use crate::paths::LearningPathCatalog;
use crate::themes::ThemeCatalog;
use crate::validation::{self, ValidationMode, ValidationReport};
use std::sync::OnceLock;
use stratgraph_core::error::Result;
use stratgraph_core::path::{Difficulty, LearningPath};
use stratgraph_core::registry::EntityRegistry;
use stratgraph_core::theme::{StrategicTheme, Urgency};
use stratgraph_core::topology::RelationshipGraph;
use stratgraph_core::types::*;
use tracing::debug;

static BUILTIN: OnceLock<StrategyGraph> = OnceLock::new();

/// The graph built from the compiled-in dataset, constructed on first use.
pub fn builtin() -> Result<&'static StrategyGraph> {
    if let Some(graph) = BUILTIN.get() {
        return Ok(graph);
    }
    let graph = StrategyGraph::from_dataset(Dataset::builtin()?, ValidationMode::Warn)?;
    Ok(BUILTIN.get_or_init(|| graph))
}

pub struct StrategyGraph {
    edges: EdgeStore,
    themes: ThemeCatalog,
    paths: LearningPathCatalog,
}

impl StrategyGraph {
    /// Build the graph, running structural validation under `mode`.
    pub fn from_dataset(dataset: Dataset, mode: ValidationMode) -> Result<Self> {
        validation::check_structure(&dataset).enforce(mode)?;
        Ok(Self::assemble(dataset))
    }

    /// Build the graph, also checking every referenced id against `registry`.
    pub fn from_dataset_checked<R>(dataset: Dataset, registry: &R, mode: ValidationMode) -> Result<Self>
    where
        R: EntityRegistry + ?Sized,
    {
        let mut report = validation::check_structure(&dataset);
        report.merge(validation::check_references(&dataset, registry));
        report.enforce(mode)?;
        Ok(Self::assemble(dataset))
    }

    fn assemble(dataset: Dataset) -> Self {
        let Dataset { edges, themes, paths } = dataset;
        let graph = Self {
            edges: EdgeStore::new(edges),
            themes: ThemeCatalog::new(themes),
            paths: LearningPathCatalog::new(paths),
        };
        debug!(
            edges = graph.edges.edge_count(),
            entities = graph.edges.entity_count(),
            themes = graph.themes.len(),
            paths = graph.paths.len(),
            "built strategy knowledge graph"
        );
        graph
    }

    /// Re-run every check against a registry without rebuilding.
    pub fn validate<R>(&self, registry: &R) -> ValidationReport
    where
        R: EntityRegistry + ?Sized,
    {
        let dataset = self.to_dataset();
        let mut report = validation::check_structure(&dataset);
        report.merge(validation::check_references(&dataset, registry));
        report
    }

    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            edges: self.edges.all_edges().to_vec(),
            themes: self.themes.as_slice().to_vec(),
            paths: self.paths.as_slice().to_vec(),
        }
    }

    pub fn edge_store(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn theme_catalog(&self) -> &ThemeCatalog {
        &self.themes
    }

    pub fn learning_path_catalog(&self) -> &LearningPathCatalog {
        &self.paths
    }

    // --- Relationship queries ---

    pub fn edges_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&KnowledgeEdge> {
        self.edges.edges_for_content(entity_type, id)
    }

    pub fn related_content(&self, entity_type: EntityType, id: &str) -> Vec<RelatedContent> {
        self.edges.related_content(entity_type, id)
    }

    pub fn edges_by_relationship(&self, relationship: Relationship) -> Vec<&KnowledgeEdge> {
        self.edges.edges_by_relationship(relationship)
    }

    pub fn neighborhood(&self, entity_type: EntityType, id: &str, max_hops: usize) -> Vec<Neighbor> {
        self.edges.neighborhood(entity_type, id, max_hops)
    }

    // --- Themes ---

    pub fn themes_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&StrategicTheme> {
        self.themes.themes_for_content(entity_type, id)
    }

    pub fn theme_by_id(&self, id: &str) -> Option<&StrategicTheme> {
        self.themes.theme_by_id(id)
    }

    pub fn themes_by_urgency(&self, urgency: Urgency) -> Vec<&StrategicTheme> {
        self.themes.themes_by_urgency(urgency)
    }

    // --- Learning paths ---

    pub fn learning_path_by_id(&self, id: &str) -> Option<&LearningPath> {
        self.paths.learning_path_by_id(id)
    }

    pub fn learning_paths_by_difficulty(&self, difficulty: Difficulty) -> Vec<&LearningPath> {
        self.paths.learning_paths_by_difficulty(difficulty)
    }

    // --- Analytics ---

    pub fn knowledge_graph_stats(&self) -> KnowledgeGraphStats {
        analytics::knowledge_graph_stats(&self.edges, &self.themes, &self.paths)
    }

    pub fn content_hubs(&self) -> Vec<ContentHub> {
        analytics::content_hubs(&self.edges)
    }

    pub fn content_hubs_by_strength(&self) -> Vec<ContentHub> {
        analytics::content_hubs_by_strength(&self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::IdRegistry;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn graph_is_shareable() {
        assert_send_sync::<StrategyGraph>();
    }

    #[test]
    fn concurrent_readers_see_the_same_answers() {
        let graph = builtin().unwrap();
        let expected_related = graph.related_content(EntityType::Framework, "rumelt-good-strategy");
        let expected_hubs = graph.content_hubs();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let g = builtin().unwrap();
                        (
                            g.related_content(EntityType::Framework, "rumelt-good-strategy"),
                            g.content_hubs(),
                        )
                    })
                })
                .collect();
            for handle in handles {
                let (related, hubs) = handle.join().unwrap();
                assert_eq!(related, expected_related);
                assert_eq!(hubs, expected_hubs);
            }
        });
    }

    #[test]
    fn builtin_is_built_once() {
        let a = builtin().unwrap();
        let b = builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn strict_checked_build_rejects_unknown_ids() {
        let dataset = Dataset::builtin().unwrap();
        let empty = IdRegistry::new();
        assert!(StrategyGraph::from_dataset_checked(dataset.clone(), &empty, ValidationMode::Strict).is_err());
        assert!(StrategyGraph::from_dataset_checked(dataset, &empty, ValidationMode::Warn).is_ok());
    }

    #[test]
    fn to_dataset_round_trips_counts() {
        let graph = builtin().unwrap();
        let dataset = graph.to_dataset();
        assert_eq!(dataset.edges.len(), graph.knowledge_graph_stats().total_edges);
        assert_eq!(dataset.paths.len(), graph.learning_path_catalog().len());
    }
}
