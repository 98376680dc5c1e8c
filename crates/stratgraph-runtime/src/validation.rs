//! Load-time consistency checks.
//!
//! Structural checks need only the dataset: empty ids, duplicate theme or
//! path ids, and learning-step `order` values that drift from their array
//! position. Referential checks additionally need an [`EntityRegistry`] and
//! flag every edge endpoint, theme member and step entity it does not know.
//!
//! Findings never change query behavior. In `Warn` mode they are logged and
//! the graph is built anyway; in `Strict` mode building fails.

use crate::dataset::Dataset;
use std::collections::HashSet;
use std::fmt;
use stratgraph_core::error::{Result, StrategyGraphError};
use stratgraph_core::registry::EntityRegistry;
use stratgraph_core::types::EntityRef;
use tracing::warn;

/// What to do when validation finds issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Log each issue and continue.
    #[default]
    Warn,
    /// Refuse to build a graph with issues.
    Strict,
}

/// A single consistency problem in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyId { location: String },
    DuplicateThemeId(String),
    DuplicatePathId(String),
    StepOrder {
        path_id: String,
        position: usize,
        expected: u32,
        found: u32,
    },
    DanglingEdgeEndpoint { edge_index: usize, entity: EntityRef },
    DanglingThemeMember { theme_id: String, entity: EntityRef },
    DanglingStepEntity { path_id: String, order: u32, entity: EntityRef },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyId { location } => write!(f, "empty id at {}", location),
            ValidationIssue::DuplicateThemeId(id) => write!(f, "duplicate theme id: {}", id),
            ValidationIssue::DuplicatePathId(id) => write!(f, "duplicate learning path id: {}", id),
            ValidationIssue::StepOrder {
                path_id,
                position,
                expected,
                found,
            } => write!(
                f,
                "path {} step #{} declares order {} (expected {})",
                path_id, position, found, expected
            ),
            ValidationIssue::DanglingEdgeEndpoint { edge_index, entity } => {
                write!(f, "edge {} references unknown {}", edge_index, entity)
            }
            ValidationIssue::DanglingThemeMember { theme_id, entity } => {
                write!(f, "theme {} lists unknown {}", theme_id, entity)
            }
            ValidationIssue::DanglingStepEntity {
                path_id,
                order,
                entity,
            } => write!(f, "path {} step {} references unknown {}", path_id, order, entity),
        }
    }
}

/// Every issue found by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    /// Apply the mode: log in `Warn`, fail in `Strict`.
    pub fn enforce(&self, mode: ValidationMode) -> Result<()> {
        if self.is_clean() {
            return Ok(());
        }
        match mode {
            ValidationMode::Warn => {
                for issue in &self.issues {
                    warn!(%issue, "knowledge graph validation");
                }
                Ok(())
            }
            ValidationMode::Strict => Err(StrategyGraphError::Validation(
                self.issues.iter().map(ToString::to_string).collect(),
            )),
        }
    }
}

/// Checks that need nothing beyond the dataset itself.
pub fn check_structure(dataset: &Dataset) -> ValidationReport {
    let mut issues = Vec::new();

    for (i, edge) in dataset.edges.iter().enumerate() {
        for (side, endpoint) in [("from", &edge.from), ("to", &edge.to)] {
            if endpoint.id.is_empty() {
                issues.push(ValidationIssue::EmptyId {
                    location: format!("edge {} {}", i, side),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for theme in &dataset.themes {
        if theme.id.is_empty() {
            issues.push(ValidationIssue::EmptyId {
                location: "theme".to_string(),
            });
        } else if !seen.insert(theme.id.as_str()) {
            issues.push(ValidationIssue::DuplicateThemeId(theme.id.clone()));
        }
        for (entity_type, id) in theme.members() {
            if id.is_empty() {
                issues.push(ValidationIssue::EmptyId {
                    location: format!("theme {} {}", theme.id, entity_type),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for path in &dataset.paths {
        if path.id.is_empty() {
            issues.push(ValidationIssue::EmptyId {
                location: "learning path".to_string(),
            });
        } else if !seen.insert(path.id.as_str()) {
            issues.push(ValidationIssue::DuplicatePathId(path.id.clone()));
        }

        // Declared order must equal 1-based array position.
        for (position, step) in path.steps.iter().enumerate() {
            let expected = position as u32 + 1;
            if step.order != expected {
                issues.push(ValidationIssue::StepOrder {
                    path_id: path.id.clone(),
                    position: position + 1,
                    expected,
                    found: step.order,
                });
            }
            if step.content_id.is_empty() {
                issues.push(ValidationIssue::EmptyId {
                    location: format!("path {} step {}", path.id, step.order),
                });
            }
        }
    }

    ValidationReport { issues }
}

/// Checks every referenced id against an external registry.
pub fn check_references<R>(dataset: &Dataset, registry: &R) -> ValidationReport
where
    R: EntityRegistry + ?Sized,
{
    let mut issues = Vec::new();

    for (edge_index, edge) in dataset.edges.iter().enumerate() {
        for endpoint in [&edge.from, &edge.to] {
            if !registry.contains_ref(endpoint) {
                issues.push(ValidationIssue::DanglingEdgeEndpoint {
                    edge_index,
                    entity: endpoint.clone(),
                });
            }
        }
    }

    for theme in &dataset.themes {
        for (entity_type, id) in theme.members() {
            if !registry.contains(entity_type, id) {
                issues.push(ValidationIssue::DanglingThemeMember {
                    theme_id: theme.id.clone(),
                    entity: EntityRef::new(entity_type, id),
                });
            }
        }
    }

    for path in &dataset.paths {
        for step in &path.steps {
            if !registry.contains(step.content_type, &step.content_id) {
                issues.push(ValidationIssue::DanglingStepEntity {
                    path_id: path.id.clone(),
                    order: step.order,
                    entity: step.entity(),
                });
            }
        }
    }

    ValidationReport { issues }
}
