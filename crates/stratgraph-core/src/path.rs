//! Learning paths: ordered guided sequences over graph entities.

use crate::error::StrategyGraphError;
use crate::types::{Bilingual, EntityRef, EntityType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who a learning path is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    NewToFqhc,
    ExperiencedLeader,
    CrisisMode,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::NewToFqhc,
        Difficulty::ExperiencedLeader,
        Difficulty::CrisisMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::NewToFqhc => "new-to-fqhc",
            Difficulty::ExperiencedLeader => "experienced-leader",
            Difficulty::CrisisMode => "crisis-mode",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = StrategyGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| StrategyGraphError::UnknownDifficulty(s.to_string()))
    }
}

/// One step of a learning path, pointing at a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStep {
    /// Author-supplied position. Expected to be 1-based and contiguous.
    pub order: u32,
    pub title: Bilingual,
    pub content_type: EntityType,
    pub content_id: String,
    pub action: Bilingual,
    pub insight: Bilingual,
}

impl LearningStep {
    pub fn entity(&self) -> EntityRef {
        EntityRef::new(self.content_type, self.content_id.clone())
    }
}

/// An ordered, guided sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: Bilingual,
    pub description: Bilingual,
    pub audience: Bilingual,
    pub difficulty: Difficulty,
    pub estimated_duration: String,
    pub steps: Vec<LearningStep>,
}

impl LearningPath {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether any step references the given entity.
    pub fn visits(&self, entity_type: EntityType, id: &str) -> bool {
        self.steps
            .iter()
            .any(|s| s.content_type == entity_type && s.content_id == id)
    }
}
