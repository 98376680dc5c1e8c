//! Stratgraph CLI - query and analyze the strategic knowledge graph.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stratgraph::prelude::{Difficulty, EntityType, Locale};
use tracing::Level;

use crate::commands::Session;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "stratgraph")]
#[command(author, version, about = "Stratgraph - strategic knowledge graph for FQHC content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Display locale (en or es)
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// Dataset directory (overrides stratgraph.toml)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default stratgraph.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show content related to an entity
    Related {
        /// Entity type (case-study, economics, framework, okr, leader, intel)
        entity_type: EntityType,
        /// Entity id
        id: String,

        /// Show the raw edges instead of neighbor rows
        #[arg(short, long)]
        edges: bool,
    },

    /// Expand related content several hops out
    Expand {
        entity_type: EntityType,
        id: String,

        /// Maximum number of hops
        #[arg(short = 'n', long, default_value = "2")]
        depth: usize,
    },

    /// Show the themes that bundle an entity
    Themes {
        entity_type: EntityType,
        id: String,
    },

    /// Show one theme in detail
    Theme {
        /// Theme id
        id: String,
    },

    /// List learning paths
    Paths {
        /// Only paths of this difficulty (new-to-fqhc, experienced-leader, crisis-mode)
        #[arg(short = 'D', long)]
        difficulty: Option<Difficulty>,
    },

    /// Show one learning path step by step
    Path {
        /// Learning path id
        id: String,
    },

    /// Show knowledge graph statistics
    Stats,

    /// Show the most connected content
    Hubs {
        /// Number of hubs to show
        #[arg(short, long)]
        top: Option<usize>,

        /// Rank by summed edge strength instead of edge count
        #[arg(short, long)]
        by_strength: bool,
    },

    /// Check the dataset for dangling references and step-order drift
    Validate {
        /// Registry of known ids (JSON object keyed by entity type)
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Export the knowledge graph
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format (json or triples)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let session = Session::new(config, cli.locale, cli.data, cli.json);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Related { entity_type, id, edges } => {
            if edges {
                commands::related::edges(&session, entity_type, &id)
            } else {
                commands::related::related(&session, entity_type, &id)
            }
        }
        Commands::Expand { entity_type, id, depth } => {
            commands::related::expand(&session, entity_type, &id, depth)
        }
        Commands::Themes { entity_type, id } => {
            commands::themes::for_content(&session, entity_type, &id)
        }
        Commands::Theme { id } => commands::themes::show(&session, &id),
        Commands::Paths { difficulty } => commands::paths::list(&session, difficulty),
        Commands::Path { id } => commands::paths::show(&session, &id),
        Commands::Stats => commands::stats::run(&session),
        Commands::Hubs { top, by_strength } => commands::hubs::run(&session, top, by_strength),
        Commands::Validate { registry } => commands::validate::run(&session, registry),
        Commands::Export { output, format } => commands::export::run(&session, &output, &format),
    }
}
