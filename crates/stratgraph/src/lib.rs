//! # Stratgraph
//!
//! Strategic knowledge graph for community health center (FQHC) recruiting
//! content.
//!
//! Case studies, economics concepts, execution frameworks, OKR templates,
//! thought leaders and intel briefs are related through typed, weighted
//! edges, bundled into strategic themes, and sequenced into learning paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use stratgraph::prelude::*;
//!
//! let graph = stratgraph::builtin().unwrap();
//!
//! // Related content for a framework page
//! for row in graph.related_content(EntityType::Framework, "rumelt-good-strategy") {
//!     println!("{} {} ({})", row.relationship, row.id, row.strength);
//! }
//!
//! // Themes that mention an economics concept
//! let themes = graph.themes_for_content(EntityType::Economics, "section-330-grants");
//! assert!(themes.iter().any(|t| t.id == "federal-survival"));
//!
//! // Most connected content
//! let hubs = graph.content_hubs();
//! assert!(!hubs.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`stratgraph_core`] - Entity, edge, theme and path types; the `RelationshipGraph` trait
//! - [`stratgraph_runtime`] - Indexed edge store, catalogs, analytics, loading, validation, export
//!
//! ## Relationship types
//!
//! | Relationship | Typical use |
//! |--------------|-------------|
//! | implements | case study → framework |
//! | demonstrates | case study → economics concept |
//! | measures | OKR → economics concept |
//! | uses | OKR → framework |
//! | advocates / created | leader → framework |
//! | informs | intel → economics concept |
//! | enables / requires / complements | concept ↔ concept |

pub use stratgraph_core;
pub use stratgraph_runtime;
pub use stratgraph_runtime::builtin;

pub mod prelude {
    //! Everything needed to query the graph.
    pub use stratgraph_runtime::prelude::*;
}
