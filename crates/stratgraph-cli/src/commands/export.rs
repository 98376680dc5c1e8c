//! Export the knowledge graph.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use stratgraph::prelude::*;

use super::Session;

pub fn run(session: &Session, output: &Path, format: &str) -> Result<()> {
    let graph = session.load_graph()?;

    let content = match format {
        "json" => serde_json::to_string_pretty(&export_graph(&graph))?,
        "triples" => serde_json::to_string_pretty(&export_triples(&graph, session.locale))?,
        other => bail!("Unknown export format: {} (expected json or triples)", other),
    };

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Exported {} edges as {} to {}",
        "✓".green(),
        graph.edge_store().edge_count().to_string().cyan(),
        format,
        output.display()
    );

    Ok(())
}
