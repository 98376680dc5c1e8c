//! Stratgraph Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use stratgraph_core::prelude::*;
//! ```

pub use crate::types::{
    EntityType, EntityRef,
    Relationship, Strength,
    KnowledgeEdge, RelatedContent,
    Bilingual, Locale,
};

pub use crate::theme::{StrategicTheme, Urgency};

pub use crate::path::{Difficulty, LearningPath, LearningStep};

pub use crate::topology::RelationshipGraph;

pub use crate::registry::EntityRegistry;

pub use crate::error::{Result, StrategyGraphError};
