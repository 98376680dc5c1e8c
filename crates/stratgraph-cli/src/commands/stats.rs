//! Show knowledge graph statistics.

use anyhow::Result;
use colored::Colorize;
use stratgraph::prelude::*;

use super::Session;

pub fn run(session: &Session) -> Result<()> {
    let graph = session.load_graph()?;
    let stats = graph.knowledge_graph_stats();

    if session.emit_json(&stats)? {
        return Ok(());
    }

    let store = graph.edge_store();

    println!("{}", "Strategy Knowledge Graph".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Total edges:       {}", stats.total_edges.to_string().cyan());
    println!("  Entities:          {}", store.entity_count().to_string().cyan());
    println!();

    println!("{}", "Catalogs".blue().bold());
    println!("  Themes:            {}", stats.total_themes.to_string().cyan());
    println!("  Learning paths:    {}", stats.total_paths.to_string().cyan());
    println!("  Learning steps:    {}", stats.total_steps.to_string().cyan());
    println!();

    println!("{}", "Edges by Relationship".blue().bold());
    for relationship in Relationship::ALL {
        let count = stats.edges_of(relationship);
        let count_str = if count == 0 {
            count.to_string().dimmed()
        } else {
            count.to_string().cyan()
        };
        println!("  {:<18} {}", relationship.to_string(), count_str);
    }
    println!();

    let core = store
        .all_edges()
        .iter()
        .filter(|e| e.strength == Strength::CORE)
        .count();
    println!("{}", "Edge Quality".blue().bold());
    println!(
        "  Core edges:        {} ({:.1}%)",
        core.to_string().green(),
        if stats.total_edges > 0 {
            (core as f64 / stats.total_edges as f64) * 100.0
        } else {
            0.0
        }
    );

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
