//! Check the dataset for consistency problems.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;
use stratgraph::prelude::*;
use tracing::warn;

use super::Session;

pub fn run(session: &Session, registry: Option<PathBuf>) -> Result<()> {
    let dataset = session.dataset()?;

    let mut report = check_structure(&dataset);
    match session.registry(registry)? {
        Some(registry) => report.merge(check_references(&dataset, &registry)),
        None => warn!("no registry configured for custom data; skipping reference checks"),
    }

    let issues: Vec<String> = report.issues.iter().map(ToString::to_string).collect();
    if session.emit_json(&issues)? {
        if !report.is_clean() {
            bail!("{} issue(s) found", report.len());
        }
        return Ok(());
    }

    if report.is_clean() {
        println!(
            "{} {} edges, {} themes, {} paths: no issues",
            "✓".green(),
            dataset.edges.len(),
            dataset.themes.len(),
            dataset.paths.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }
    println!();
    bail!("{} issue(s) found", report.len());
}
