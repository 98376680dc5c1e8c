//! Property checks over the built-in strategy knowledge graph.

use stratgraph_runtime::prelude::*;

fn graph() -> &'static StrategyGraph {
    builtin().expect("built-in dataset should load")
}

#[test]
fn unreferenced_entities_yield_empty_results() {
    let g = graph();
    for entity_type in EntityType::ALL {
        assert!(g.edges_for_content(entity_type, "no-such-entity").is_empty());
        assert!(g.related_content(entity_type, "no-such-entity").is_empty());
    }
}

#[test]
fn every_edge_is_found_from_both_endpoints() {
    let g = graph();
    for edge in g.edge_store().all_edges() {
        for endpoint in [&edge.from, &edge.to] {
            let found = g.edges_for_content(endpoint.entity_type, &endpoint.id);
            assert!(
                found.iter().any(|e| *e == edge),
                "edge {} -> {} missing from query on {}",
                edge.from,
                edge.to,
                endpoint
            );
        }
    }
}

#[test]
fn related_content_has_one_row_per_edge() {
    let g = graph();
    for entity in g.edge_store().entities() {
        assert_eq!(
            g.related_content(entity.entity_type, &entity.id).len(),
            g.edges_for_content(entity.entity_type, &entity.id).len()
        );
    }
}

#[test]
fn indexed_store_matches_linear_scan() {
    let g = graph();
    let edges = g.edge_store().all_edges();
    for entity in g.edge_store().entities() {
        assert_eq!(
            g.related_content(entity.entity_type, &entity.id),
            edges.related_content(entity.entity_type, &entity.id)
        );
    }
}

#[test]
fn intel_is_never_theme_bundled() {
    let g = graph();
    for entity in g.edge_store().entities() {
        assert!(g.themes_for_content(EntityType::Intel, &entity.id).is_empty());
    }
    assert!(g.themes_for_content(EntityType::Intel, "hrsa-funding-cliff-2025").is_empty());
}

#[test]
fn stats_cover_every_relationship() {
    let stats = graph().knowledge_graph_stats();
    for relationship in Relationship::ALL {
        assert!(stats.edges_by_type.contains_key(&relationship));
    }
    let summed: usize = stats.edges_by_type.values().sum();
    assert_eq!(summed, stats.total_edges);

    let steps: usize = graph().learning_path_catalog().iter().map(|p| p.steps.len()).sum();
    assert_eq!(stats.total_steps, steps);
}

#[test]
fn hubs_are_sorted_and_sum_to_twice_the_edges() {
    let g = graph();
    let hubs = g.content_hubs();
    assert!(hubs.windows(2).all(|w| w[0].connection_count >= w[1].connection_count));
    let total: usize = hubs.iter().map(|h| h.connection_count).sum();
    assert_eq!(total, 2 * g.knowledge_graph_stats().total_edges);
    assert_eq!(hubs.len(), g.edge_store().entity_count());
}

#[test]
fn top_hub_ties_break_by_encounter_order() {
    let hubs = graph().content_hubs();
    assert_eq!(hubs[0].entity_type, EntityType::CaseStudy);
    assert_eq!(hubs[0].id, "pureview-federal-dependency");
    assert_eq!(hubs[0].connection_count, 4);
}

#[test]
fn learning_path_lookup() {
    let g = graph();
    for path in g.learning_path_catalog().iter() {
        assert_eq!(g.learning_path_by_id(&path.id), Some(path));
    }
    assert!(g.learning_path_by_id("not-a-path").is_none());
}

#[test]
fn difficulty_filter_matches_hand_filter() {
    let g = graph();
    for difficulty in Difficulty::ALL {
        let filtered = g.learning_paths_by_difficulty(difficulty);
        let by_hand: Vec<&LearningPath> = g
            .learning_path_catalog()
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect();
        assert_eq!(filtered, by_hand);
        assert!(filtered.iter().all(|p| p.difficulty == difficulty));
    }
}

#[test]
fn rumelt_framework_relates_back_to_pureview() {
    let related = graph().related_content(EntityType::Framework, "rumelt-good-strategy");
    assert!(related.contains(&RelatedContent {
        entity_type: EntityType::CaseStudy,
        id: "pureview-federal-dependency".to_string(),
        relationship: Relationship::Implements,
        strength: Strength::CORE,
    }));
}

#[test]
fn section_330_belongs_to_federal_survival() {
    let themes = graph().themes_for_content(EntityType::Economics, "section-330-grants");
    assert!(themes.iter().any(|t| t.id == "federal-survival"));
}

#[test]
fn builtin_dataset_is_consistent() {
    let registry = IdRegistry::builtin().unwrap();
    let report = graph().validate(&registry);
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn neighborhood_reaches_beyond_one_hop() {
    let g = graph();
    let one = g.neighborhood(EntityType::Leader, "richard-rumelt", 1);
    let two = g.neighborhood(EntityType::Leader, "richard-rumelt", 2);
    assert_eq!(one.len(), 1);
    assert!(two.len() > one.len());
    assert!(two.iter().any(|n| n.entity.id == "pureview-federal-dependency" && n.hops == 2));
}
