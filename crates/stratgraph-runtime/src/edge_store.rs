//! Concrete implementation of the RelationshipGraph trait using petgraph.
//!
//! Edges are kept in declaration order in a plain `Vec`; the petgraph
//! `Graph` mirrors them with the declaration index as edge weight so that
//! endpoint lookups are O(degree) instead of O(E). Query results are
//! re-sorted by declaration index, which keeps the output identical to a
//! linear scan over the edge list.

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};
use stratgraph_core::topology::RelationshipGraph;
use stratgraph_core::types::*;

/// An entity reached by breadth-first related-content expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub entity: EntityRef,
    /// Number of edges between the origin and this entity.
    pub hops: usize,
}

/// Petgraph-backed, read-only store of knowledge edges.
pub struct EdgeStore {
    edges: Vec<KnowledgeEdge>,
    graph: Graph<EntityRef, usize, petgraph::Directed>,
    /// Map from entity reference to petgraph's internal index.
    node_index: HashMap<EntityRef, NodeIndex>,
}

impl EdgeStore {
    pub fn new(edges: Vec<KnowledgeEdge>) -> Self {
        let mut graph: Graph<EntityRef, usize> = Graph::with_capacity(edges.len(), edges.len());
        let mut node_index: HashMap<EntityRef, NodeIndex> = HashMap::new();

        for (position, edge) in edges.iter().enumerate() {
            let from_idx = *node_index
                .entry(edge.from.clone())
                .or_insert_with(|| graph.add_node(edge.from.clone()));
            let to_idx = *node_index
                .entry(edge.to.clone())
                .or_insert_with(|| graph.add_node(edge.to.clone()));
            graph.add_edge(from_idx, to_idx, position);
        }

        Self {
            edges,
            graph,
            node_index,
        }
    }

    /// Number of distinct entities that appear as an endpoint.
    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Every distinct endpoint, in first-encounter order.
    pub fn entities(&self) -> Vec<&EntityRef> {
        self.graph
            .node_indices()
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Declaration indices of every edge touching the node, ascending.
    fn edge_positions(&self, node_idx: NodeIndex) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(node_idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(node_idx, Direction::Incoming))
            .map(|edge| *edge.weight())
            .collect();
        // A self-loop shows up in both directions but is one edge.
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Breadth-first expansion of related content up to `max_hops` edges
    /// away, ignoring edge direction.
    ///
    /// The origin is excluded. Entities come back in discovery order, which
    /// follows declaration order at each hop.
    pub fn neighborhood(&self, entity_type: EntityType, id: &str, max_hops: usize) -> Vec<Neighbor> {
        let origin = EntityRef::new(entity_type, id);
        let Some(&start) = self.node_index.get(&origin) else {
            return Vec::new();
        };

        let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(start, 0)]);
        let mut found = Vec::new();

        while let Some((node_idx, hops)) = queue.pop_front() {
            if hops >= max_hops {
                continue;
            }
            for position in self.edge_positions(node_idx) {
                let edge = &self.edges[position];
                let here = &self.graph[node_idx];
                let other = edge.other_endpoint(here.entity_type, &here.id);
                let Some(&other_idx) = self.node_index.get(other) else {
                    continue;
                };
                if visited.insert(other_idx) {
                    found.push(Neighbor {
                        entity: other.clone(),
                        hops: hops + 1,
                    });
                    queue.push_back((other_idx, hops + 1));
                }
            }
        }

        found
    }
}

impl Default for EdgeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RelationshipGraph for EdgeStore {
    fn all_edges(&self) -> &[KnowledgeEdge] {
        &self.edges
    }

    fn edges_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&KnowledgeEdge> {
        let key = EntityRef::new(entity_type, id);
        let Some(&node_idx) = self.node_index.get(&key) else {
            return Vec::new();
        };

        self.edge_positions(node_idx)
            .into_iter()
            .map(|position| &self.edges[position])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: (EntityType, &str), to: (EntityType, &str), rel: Relationship, strength: u8) -> KnowledgeEdge {
        KnowledgeEdge::new(
            EntityRef::new(from.0, from.1),
            EntityRef::new(to.0, to.1),
            rel,
            Strength::try_from(strength).unwrap(),
        )
    }

    fn sample() -> EdgeStore {
        EdgeStore::new(vec![
            edge(
                (EntityType::CaseStudy, "pureview-federal-dependency"),
                (EntityType::Framework, "rumelt-good-strategy"),
                Relationship::Implements,
                3,
            ),
            edge(
                (EntityType::Leader, "richard-rumelt"),
                (EntityType::Framework, "rumelt-good-strategy"),
                Relationship::Created,
                3,
            ),
            edge(
                (EntityType::Framework, "rumelt-good-strategy"),
                (EntityType::Framework, "scenario-planning"),
                Relationship::Complements,
                2,
            ),
            edge(
                (EntityType::Framework, "scenario-planning"),
                (EntityType::Intel, "hrsa-funding-cliff-2025"),
                Relationship::Uses,
                1,
            ),
        ])
    }

    #[test]
    fn matches_both_endpoints_in_declaration_order() {
        let store = sample();
        let edges = store.edges_for_content(EntityType::Framework, "rumelt-good-strategy");
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].relationship, Relationship::Implements);
        assert_eq!(edges[1].relationship, Relationship::Created);
        assert_eq!(edges[2].relationship, Relationship::Complements);
    }

    #[test]
    fn related_content_reports_other_endpoint() {
        let store = sample();
        let related = store.related_content(EntityType::Framework, "rumelt-good-strategy");
        assert_eq!(
            related[0],
            RelatedContent {
                entity_type: EntityType::CaseStudy,
                id: "pureview-federal-dependency".into(),
                relationship: Relationship::Implements,
                strength: Strength::CORE,
            }
        );
        assert_eq!(related[2].id, "scenario-planning");
    }

    #[test]
    fn type_must_match_exactly() {
        let store = sample();
        assert!(store.edges_for_content(EntityType::Leader, "rumelt-good-strategy").is_empty());
        assert!(store.edges_for_content(EntityType::Framework, "rumelt").is_empty());
    }

    #[test]
    fn duplicate_neighbors_are_kept() {
        let store = EdgeStore::new(vec![
            edge((EntityType::Okr, "a"), (EntityType::Framework, "f"), Relationship::Uses, 3),
            edge((EntityType::Framework, "f"), (EntityType::Okr, "a"), Relationship::Enables, 1),
        ]);
        let related = store.related_content(EntityType::Okr, "a");
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].relationship, Relationship::Uses);
        assert_eq!(related[1].relationship, Relationship::Enables);
    }

    #[test]
    fn self_loop_reported_once() {
        let store = EdgeStore::new(vec![edge(
            (EntityType::Economics, "x"),
            (EntityType::Economics, "x"),
            Relationship::Complements,
            1,
        )]);
        let related = store.related_content(EntityType::Economics, "x");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "x");
    }

    #[test]
    fn neighborhood_expands_by_hops() {
        let store = sample();
        let one = store.neighborhood(EntityType::CaseStudy, "pureview-federal-dependency", 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].entity.id, "rumelt-good-strategy");

        let three = store.neighborhood(EntityType::CaseStudy, "pureview-federal-dependency", 3);
        let ids: Vec<(&str, usize)> = three.iter().map(|n| (n.entity.id.as_str(), n.hops)).collect();
        assert_eq!(
            ids,
            vec![
                ("rumelt-good-strategy", 1),
                ("richard-rumelt", 2),
                ("scenario-planning", 2),
                ("hrsa-funding-cliff-2025", 3),
            ]
        );

        assert!(store.neighborhood(EntityType::CaseStudy, "pureview-federal-dependency", 0).is_empty());
        assert!(store.neighborhood(EntityType::Okr, "missing", 2).is_empty());
    }

    #[test]
    fn counts_distinct_entities() {
        let store = sample();
        assert_eq!(store.entity_count(), 5);
        assert_eq!(store.edge_count(), 4);
        assert_eq!(store.entities()[0].id, "pureview-federal-dependency");
    }
}
