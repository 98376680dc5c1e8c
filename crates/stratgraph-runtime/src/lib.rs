//! # Stratgraph Runtime
//!
//! Edge store, catalogs, analytics and dataset loading.
//!
//! The runtime turns the static tables (edges, themes, learning paths) into
//! an indexed, read-only [`StrategyGraph`](knowledge_graph::StrategyGraph)
//! and answers every relationship, theme, path and analytics query over it.

pub mod edge_store;
pub mod themes;
pub mod paths;
pub mod analytics;
pub mod dataset;
pub mod registry;
pub mod validation;
pub mod knowledge_graph;
pub mod export;
pub mod prelude;

pub use knowledge_graph::builtin;
