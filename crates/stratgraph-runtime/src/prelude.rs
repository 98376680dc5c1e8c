//! Stratgraph Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use stratgraph_runtime::prelude::*;
//! ```

// Re-export the graph
pub use crate::knowledge_graph::{builtin, StrategyGraph};

// Re-export stores and catalogs
pub use crate::edge_store::{EdgeStore, Neighbor};
pub use crate::themes::ThemeCatalog;
pub use crate::paths::LearningPathCatalog;

// Re-export analytics
pub use crate::analytics::{
    ContentHub, KnowledgeGraphStats,
    content_hubs, content_hubs_by_strength, knowledge_graph_stats,
};

// Re-export loading and validation
pub use crate::dataset::Dataset;
pub use crate::registry::IdRegistry;
pub use crate::validation::{
    ValidationIssue, ValidationMode, ValidationReport,
    check_references, check_structure,
};

// Re-export export
pub use crate::export::{ExportMetadata, GraphExport, StrengthTriple, export_graph, export_triples};

// Re-export from core
pub use stratgraph_core::prelude::*;
