//! Show the most connected content.

use anyhow::Result;
use colored::Colorize;

use super::Session;

pub fn run(session: &Session, top: Option<usize>, by_strength: bool) -> Result<()> {
    let graph = session.load_graph()?;
    let top = top.unwrap_or(session.config.display.top);

    let mut hubs = if by_strength {
        graph.content_hubs_by_strength()
    } else {
        graph.content_hubs()
    };
    hubs.truncate(top);

    if session.emit_json(&hubs)? {
        return Ok(());
    }

    println!("{} {}", "→".blue(), heading(hubs.len(), by_strength));
    println!();

    for (i, hub) in hubs.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            hub.id.white().bold(),
            format!(
                "({}; {} connections, strength {})",
                hub.entity_type, hub.connection_count, hub.total_strength
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Header line; `shown` is the count left after truncation.
fn heading(shown: usize, by_strength: bool) -> String {
    let metric = if by_strength { "summed strength" } else { "connections" };
    format!("Top {} hubs by {}:", shown, metric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_reports_hubs_actually_shown() {
        let session = crate::commands::Session::new(crate::config::Config::default(), None, None, true);
        let graph = session.load_graph().unwrap();
        let mut hubs = graph.content_hubs();
        hubs.truncate(50);
        assert!(hubs.len() < 50);
        assert_eq!(
            heading(hubs.len(), false),
            format!("Top {} hubs by connections:", hubs.len())
        );
        assert_eq!(heading(3, true), "Top 3 hubs by summed strength:");
    }
}
