//! # Stratgraph Core
//!
//! Core traits and types for the strategic knowledge graph.
//!
//! The graph relates heterogeneous content entities (case studies,
//! economics concepts, execution frameworks, OKR templates, thought leaders
//! and intel briefs) through typed, weighted edges. Entities are referenced
//! by `(type, id)` only; their payload lives in external registries.
//!
//! - **Edges**: directed, typed, strength-rated relationships
//! - **Themes**: curated bundles of entity ids with an urgency rating
//! - **Learning paths**: ordered guided sequences over entities
//!
//! ## Quick Start
//!
//! ```rust
//! use stratgraph_core::prelude::*;
//!
//! let rumelt = EntityRef::new(EntityType::Framework, "rumelt-good-strategy");
//! assert_eq!(rumelt.to_string(), "framework:rumelt-good-strategy");
//!
//! let strength = Strength::try_from(3u8).unwrap();
//! assert_eq!(strength, Strength::CORE);
//! ```

pub mod types;
pub mod theme;
pub mod path;
pub mod topology;
pub mod registry;
pub mod error;
pub mod prelude;
