//! Theme membership and theme detail.

use anyhow::{bail, Result};
use colored::{ColoredString, Colorize};
use stratgraph::prelude::*;

use super::Session;

fn urgency_label(urgency: Urgency) -> ColoredString {
    match urgency {
        Urgency::Critical => "critical".red().bold(),
        Urgency::High => "high".yellow(),
        Urgency::Medium => "medium".normal(),
    }
}

pub fn for_content(session: &Session, entity_type: EntityType, id: &str) -> Result<()> {
    let graph = session.load_graph()?;
    let themes = graph.themes_for_content(entity_type, id);

    if session.emit_json(&themes)? {
        return Ok(());
    }

    if themes.is_empty() {
        println!("{} No theme bundles {}", "•".yellow(), format!("{}:{}", entity_type, id).cyan());
        return Ok(());
    }

    for theme in themes {
        println!(
            "  {} {} {}",
            theme.id.white().bold(),
            theme.title.get(session.locale),
            format!("[{}]", urgency_label(theme.urgency)).dimmed()
        );
    }

    Ok(())
}

pub fn show(session: &Session, id: &str) -> Result<()> {
    let graph = session.load_graph()?;
    let Some(theme) = graph.theme_by_id(id) else {
        bail!("No theme with id: {}", id);
    };

    if session.emit_json(theme)? {
        return Ok(());
    }

    let locale = session.locale;
    println!("{} {}", theme.title.get(locale).white().bold(), urgency_label(theme.urgency));
    println!("{}", theme.subtitle.get(locale).dimmed());
    println!();
    println!("{}", theme.description.get(locale));
    println!();

    for entity_type in EntityType::ALL {
        let ids = theme.ids_for(entity_type);
        if ids.is_empty() {
            continue;
        }
        println!("{}", entity_type.to_string().blue().bold());
        for member in ids {
            println!("  • {}", member);
        }
    }

    println!();
    println!("{} {}", "Foresight:".blue().bold(), theme.foresight.get(locale));

    Ok(())
}
