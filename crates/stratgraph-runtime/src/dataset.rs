//! Dataset loading: the static tables the graph is built from.
//!
//! The built-in dataset is compiled into the binary from `data/*.json`.
//! A directory holding the same three files can replace it at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stratgraph_core::error::{Result, StrategyGraphError};
use stratgraph_core::path::LearningPath;
use stratgraph_core::theme::StrategicTheme;
use stratgraph_core::types::KnowledgeEdge;
use tracing::debug;

pub const EDGES_FILE: &str = "edges.json";
pub const THEMES_FILE: &str = "themes.json";
pub const PATHS_FILE: &str = "learning_paths.json";

const BUILTIN_EDGES: &str = include_str!("../data/edges.json");
const BUILTIN_THEMES: &str = include_str!("../data/themes.json");
const BUILTIN_PATHS: &str = include_str!("../data/learning_paths.json");

/// The raw tables behind a knowledge graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub edges: Vec<KnowledgeEdge>,
    pub themes: Vec<StrategicTheme>,
    pub paths: Vec<LearningPath>,
}

impl Dataset {
    /// Parse the dataset compiled into this crate.
    pub fn builtin() -> Result<Self> {
        let dataset = Self {
            edges: parse(EDGES_FILE, BUILTIN_EDGES)?,
            themes: parse(THEMES_FILE, BUILTIN_THEMES)?,
            paths: parse(PATHS_FILE, BUILTIN_PATHS)?,
        };
        debug!(
            edges = dataset.edges.len(),
            themes = dataset.themes.len(),
            paths = dataset.paths.len(),
            "parsed built-in dataset"
        );
        Ok(dataset)
    }

    /// Load `edges.json`, `themes.json` and `learning_paths.json` from a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let dataset = Self {
            edges: read(dir, EDGES_FILE)?,
            themes: read(dir, THEMES_FILE)?,
            paths: read(dir, PATHS_FILE)?,
        };
        debug!(
            dir = %dir.display(),
            edges = dataset.edges.len(),
            themes = dataset.themes.len(),
            paths = dataset.paths.len(),
            "loaded dataset from directory"
        );
        Ok(dataset)
    }
}

fn parse<T: serde::de::DeserializeOwned>(file: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| StrategyGraphError::parse(file, e))
}

fn read<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let content = std::fs::read_to_string(&path).map_err(|e| StrategyGraphError::io(&path, e))?;
    parse(&path.display().to_string(), &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_parses() {
        let dataset = Dataset::builtin().unwrap();
        assert!(!dataset.edges.is_empty());
        assert!(!dataset.themes.is_empty());
        assert!(!dataset.paths.is_empty());
    }

    #[test]
    fn from_dir_reads_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EDGES_FILE),
            r#"[{"from":{"type":"okr","id":"a"},"to":{"type":"framework","id":"b"},"relationship":"uses","strength":2}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(THEMES_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(PATHS_FILE), "[]").unwrap();

        let dataset = Dataset::from_dir(dir.path()).unwrap();
        assert_eq!(dataset.edges.len(), 1);
        assert!(dataset.themes.is_empty());
    }

    #[test]
    fn from_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, StrategyGraphError::Io { .. }));
    }

    #[test]
    fn parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(EDGES_FILE), r#"[{"strength": 9}]"#).unwrap();
        let err = Dataset::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains(EDGES_FILE));
    }
}
