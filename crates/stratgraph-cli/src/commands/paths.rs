//! Learning path listing and detail.

use anyhow::{bail, Result};
use colored::Colorize;
use stratgraph::prelude::*;

use super::Session;

pub fn list(session: &Session, difficulty: Option<Difficulty>) -> Result<()> {
    let graph = session.load_graph()?;
    let paths: Vec<&LearningPath> = match difficulty {
        Some(d) => graph.learning_paths_by_difficulty(d),
        None => graph.learning_path_catalog().iter().collect(),
    };

    if session.emit_json(&paths)? {
        return Ok(());
    }

    if paths.is_empty() {
        println!("{} No learning paths", "•".yellow());
        return Ok(());
    }

    for path in paths {
        println!(
            "  {} {} {}",
            path.id.white().bold(),
            path.title.get(session.locale),
            format!("[{}, {} steps, {}]", path.difficulty, path.step_count(), path.estimated_duration).dimmed()
        );
    }

    Ok(())
}

pub fn show(session: &Session, id: &str) -> Result<()> {
    let graph = session.load_graph()?;
    let Some(path) = graph.learning_path_by_id(id) else {
        bail!("No learning path with id: {}", id);
    };

    if session.emit_json(path)? {
        return Ok(());
    }

    let locale = session.locale;
    println!("{}", path.title.get(locale).white().bold());
    println!("{}", path.description.get(locale));
    println!(
        "{} {}  {} {}",
        "Audience:".blue(),
        path.audience.get(locale),
        "Duration:".blue(),
        path.estimated_duration
    );
    println!();

    // Steps print in declared order.
    for step in &path.steps {
        println!(
            "  {} {} {}",
            format!("{}.", step.order).blue(),
            step.title.get(locale).white().bold(),
            format!("({})", step.entity()).dimmed()
        );
        println!("      {} {}", "→".green(), step.action.get(locale));
        println!("      {} {}", "✦".yellow(), step.insight.get(locale).dimmed());
    }

    Ok(())
}
