//! Related-content queries.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use stratgraph::prelude::*;

use super::Session;

fn strength_marker(strength: Strength) -> String {
    match strength.value() {
        3 => "●●●".green().to_string(),
        2 => "●●○".yellow().to_string(),
        _ => "●○○".dimmed().to_string(),
    }
}

pub fn related(session: &Session, entity_type: EntityType, id: &str) -> Result<()> {
    let graph = session.load_graph()?;
    let rows = graph.related_content(entity_type, id);

    if session.emit_json(&rows)? {
        return Ok(());
    }

    if rows.is_empty() {
        println!("{} Nothing related to {}", "•".yellow(), format!("{}:{}", entity_type, id).cyan());
        return Ok(());
    }

    println!(
        "{} {} related to {}:",
        "→".blue(),
        rows.len().to_string().cyan(),
        format!("{}:{}", entity_type, id).cyan().bold()
    );
    println!();

    for row in &rows {
        println!(
            "  {} {:<13} {} {}",
            strength_marker(row.strength),
            row.relationship.to_string().blue(),
            row.id.white().bold(),
            format!("({})", row.entity_type).dimmed()
        );
    }

    Ok(())
}

pub fn edges(session: &Session, entity_type: EntityType, id: &str) -> Result<()> {
    let graph = session.load_graph()?;
    let edges = graph.edges_for_content(entity_type, id);

    if session.emit_json(&edges)? {
        return Ok(());
    }

    if edges.is_empty() {
        println!("{} No edges touch {}", "•".yellow(), format!("{}:{}", entity_type, id).cyan());
        return Ok(());
    }

    for edge in edges {
        println!(
            "  {} {} {} {}",
            edge.from.to_string().white(),
            format!("-{}->", edge.relationship).blue(),
            edge.to.to_string().white(),
            format!("[{}]", edge.strength).dimmed()
        );
        if let Some(context) = &edge.context {
            println!("      {}", context.get(session.locale).dimmed());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct NeighborRow<'a> {
    #[serde(flatten)]
    entity: &'a EntityRef,
    hops: usize,
}

pub fn expand(session: &Session, entity_type: EntityType, id: &str, depth: usize) -> Result<()> {
    let graph = session.load_graph()?;
    let neighbors = graph.neighborhood(entity_type, id, depth);

    let rows: Vec<NeighborRow> = neighbors
        .iter()
        .map(|n| NeighborRow {
            entity: &n.entity,
            hops: n.hops,
        })
        .collect();
    if session.emit_json(&rows)? {
        return Ok(());
    }

    if neighbors.is_empty() {
        println!("{} Nothing within {} hops of {}", "•".yellow(), depth, format!("{}:{}", entity_type, id).cyan());
        return Ok(());
    }

    println!(
        "{} Within {} hops of {}:",
        "→".blue(),
        depth.to_string().cyan(),
        format!("{}:{}", entity_type, id).cyan().bold()
    );

    let mut current_hop = 0;
    for neighbor in &neighbors {
        if neighbor.hops != current_hop {
            current_hop = neighbor.hops;
            println!();
            println!("  {}", format!("{} hop(s)", current_hop).blue().bold());
        }
        println!("    {}", neighbor.entity);
    }

    Ok(())
}
