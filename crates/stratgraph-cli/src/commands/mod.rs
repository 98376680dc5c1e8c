//! CLI command implementations.

pub mod init;
pub mod related;
pub mod themes;
pub mod paths;
pub mod stats;
pub mod hubs;
pub mod validate;
pub mod export;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use stratgraph::prelude::*;

use crate::config::Config;

/// Settings resolved from config and command-line flags.
pub struct Session {
    pub config: Config,
    pub locale: Locale,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
}

impl Session {
    pub fn new(config: Config, locale: Option<Locale>, data_dir: Option<PathBuf>, json: bool) -> Self {
        let locale = locale.unwrap_or(config.display.locale);
        let data_dir = data_dir.or_else(|| config.catalog.data_dir.clone());
        Self {
            config,
            locale,
            data_dir,
            json,
        }
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.config.validation.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Warn
        }
    }

    pub fn dataset(&self) -> Result<Dataset> {
        match &self.data_dir {
            Some(dir) => Dataset::from_dir(dir)
                .with_context(|| format!("Failed to load dataset from {}", dir.display())),
            None => Dataset::builtin().context("Failed to parse built-in dataset"),
        }
    }

    /// The registry to check references against, if one applies.
    ///
    /// An explicit path wins; the built-in registry only matches the
    /// built-in dataset, so custom data without a registry is not checked.
    pub fn registry(&self, explicit: Option<PathBuf>) -> Result<Option<IdRegistry>> {
        let path = explicit.or_else(|| self.config.catalog.registry.clone());
        match path {
            Some(path) => IdRegistry::from_path(&path)
                .with_context(|| format!("Failed to load registry {}", path.display()))
                .map(Some),
            None if self.data_dir.is_none() => Ok(Some(IdRegistry::builtin()?)),
            None => Ok(None),
        }
    }

    /// Build the graph once for this invocation.
    pub fn load_graph(&self) -> Result<StrategyGraph> {
        let dataset = self.dataset()?;
        let mode = self.validation_mode();
        let registry = if self.config.validation.check_registry {
            self.registry(None)?
        } else {
            None
        };

        let graph = match registry {
            Some(registry) => StrategyGraph::from_dataset_checked(dataset, &registry, mode)?,
            None => StrategyGraph::from_dataset(dataset, mode)?,
        };
        Ok(graph)
    }

    /// Print `value` as pretty JSON when `--json` was given.
    ///
    /// Returns whether it printed, so callers can skip their text output.
    pub fn emit_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<bool> {
        if !self.json {
            return Ok(false);
        }
        let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", text);
        Ok(true)
    }
}
