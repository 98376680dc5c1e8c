//! Id registry: a set of known entity ids per type.
//!
//! Stands in for the external content registries when checking referential
//! integrity. Loaded from a JSON object mapping each entity type to its ids.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use stratgraph_core::error::{Result, StrategyGraphError};
use stratgraph_core::registry::EntityRegistry;
use stratgraph_core::types::{EntityRef, EntityType};

const BUILTIN_REGISTRY: &str = include_str!("../data/registry.json");

#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: HashMap<EntityType, HashSet<String>>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry matching the built-in dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_json("registry.json", BUILTIN_REGISTRY)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StrategyGraphError::io(path, e))?;
        Self::from_json(&path.display().to_string(), &content)
    }

    fn from_json(file: &str, content: &str) -> Result<Self> {
        let raw: BTreeMap<EntityType, Vec<String>> =
            serde_json::from_str(content).map_err(|e| StrategyGraphError::parse(file, e))?;
        let mut registry = Self::new();
        for (entity_type, ids) in raw {
            for id in ids {
                registry.insert(entity_type, id);
            }
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entity_type: EntityType, id: impl Into<String>) {
        self.ids.entry(entity_type).or_default().insert(id.into());
    }

    pub fn len(&self) -> usize {
        self.ids.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<EntityRef> for IdRegistry {
    fn from_iter<I: IntoIterator<Item = EntityRef>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entity in iter {
            registry.insert(entity.entity_type, entity.id);
        }
        registry
    }
}

impl EntityRegistry for IdRegistry {
    fn contains(&self, entity_type: EntityType, id: &str) -> bool {
        self.ids
            .get(&entity_type)
            .is_some_and(|ids| ids.contains(id))
    }
}
