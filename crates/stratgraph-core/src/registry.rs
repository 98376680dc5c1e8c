//! Entity registries: the external catalogs that hold entity payloads.
//!
//! The graph only stores ids. A registry answers whether an id exists so
//! that dangling references can be caught at load time.

use crate::types::{EntityRef, EntityType};

/// Lookup of known entity ids per type.
pub trait EntityRegistry {
    /// Whether `(entity_type, id)` names a registered entity.
    fn contains(&self, entity_type: EntityType, id: &str) -> bool;

    fn contains_ref(&self, entity: &EntityRef) -> bool {
        self.contains(entity.entity_type, &entity.id)
    }
}

