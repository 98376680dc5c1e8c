//! Error types for loading and parsing the knowledge graph.
//!
//! Queries never fail; only dataset loading, parsing of closed-set names
//! and strict validation produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for knowledge graph operations.
pub type Result<T> = std::result::Result<T, StrategyGraphError>;

/// Errors that can occur while building or loading the graph.
#[derive(Debug, Error)]
pub enum StrategyGraphError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid strength: {0} (must be 1-3)")]
    InvalidStrength(u8),

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Unknown relationship: {0}")]
    UnknownRelationship(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown urgency: {0}")]
    UnknownUrgency(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Validation failed with {} issue(s); first: {}", .0.len(), .0.first().map(String::as_str).unwrap_or("none"))]
    Validation(Vec<String>),
}

impl StrategyGraphError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StrategyGraphError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(file: impl Into<String>, source: serde_json::Error) -> Self {
        StrategyGraphError::Parse {
            file: file.into(),
            source,
        }
    }
}
