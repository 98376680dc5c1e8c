//! Theme catalog and membership resolver.

use stratgraph_core::theme::{StrategicTheme, Urgency};
use stratgraph_core::types::EntityType;

/// The fixed set of strategic themes, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: Vec<StrategicTheme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<StrategicTheme>) -> Self {
        Self { themes }
    }

    /// Every theme whose bundle lists `(entity_type, id)`, in catalog order.
    ///
    /// Intel content is not theme-bundled and always resolves to nothing.
    pub fn themes_for_content(&self, entity_type: EntityType, id: &str) -> Vec<&StrategicTheme> {
        self.themes
            .iter()
            .filter(|theme| theme.contains(entity_type, id))
            .collect()
    }

    pub fn theme_by_id(&self, id: &str) -> Option<&StrategicTheme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn themes_by_urgency(&self, urgency: Urgency) -> Vec<&StrategicTheme> {
        self.themes
            .iter()
            .filter(|theme| theme.urgency == urgency)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategicTheme> {
        self.themes.iter()
    }

    pub fn as_slice(&self) -> &[StrategicTheme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
