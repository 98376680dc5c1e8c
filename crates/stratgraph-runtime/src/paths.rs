//! Learning path catalog and accessors.
//!
//! Steps are handed back exactly as declared; ordering is the data
//! author's responsibility and is checked by the validation pass.

use stratgraph_core::path::{Difficulty, LearningPath};

/// The fixed set of learning paths, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct LearningPathCatalog {
    paths: Vec<LearningPath>,
}

impl LearningPathCatalog {
    pub fn new(paths: Vec<LearningPath>) -> Self {
        Self { paths }
    }

    pub fn learning_path_by_id(&self, id: &str) -> Option<&LearningPath> {
        self.paths.iter().find(|path| path.id == id)
    }

    pub fn learning_paths_by_difficulty(&self, difficulty: Difficulty) -> Vec<&LearningPath> {
        self.paths
            .iter()
            .filter(|path| path.difficulty == difficulty)
            .collect()
    }

    /// Sum of step counts over every path.
    pub fn total_steps(&self) -> usize {
        self.paths.iter().map(LearningPath::step_count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LearningPath> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[LearningPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratgraph_core::path::LearningStep;
    use stratgraph_core::types::{Bilingual, EntityType};

    fn step(order: u32, id: &str) -> LearningStep {
        LearningStep {
            order,
            title: Bilingual::new(id, id),
            content_type: EntityType::Framework,
            content_id: id.into(),
            action: Bilingual::default(),
            insight: Bilingual::default(),
        }
    }

    fn path(id: &str, difficulty: Difficulty, steps: Vec<LearningStep>) -> LearningPath {
        LearningPath {
            id: id.into(),
            title: Bilingual::new(id, id),
            description: Bilingual::default(),
            audience: Bilingual::default(),
            difficulty,
            estimated_duration: "1 hour".into(),
            steps,
        }
    }

    fn catalog() -> LearningPathCatalog {
        LearningPathCatalog::new(vec![
            path("a", Difficulty::NewToFqhc, vec![step(1, "x"), step(2, "y")]),
            path("b", Difficulty::CrisisMode, vec![step(2, "late"), step(1, "early")]),
            path("c", Difficulty::NewToFqhc, vec![step(1, "z")]),
        ])
    }

    #[test]
    fn finds_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.learning_path_by_id("b").map(|p| p.id.as_str()), Some("b"));
        assert!(catalog.learning_path_by_id("nope").is_none());
    }

    #[test]
    fn filters_by_difficulty_in_catalog_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .learning_paths_by_difficulty(Difficulty::NewToFqhc)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(catalog.learning_paths_by_difficulty(Difficulty::ExperiencedLeader).is_empty());
    }

    #[test]
    fn steps_pass_through_unsorted() {
        let catalog = catalog();
        let b = catalog.learning_path_by_id("b").unwrap();
        assert_eq!(b.steps[0].content_id, "late");
        assert_eq!(b.steps[1].content_id, "early");
    }

    #[test]
    fn totals_steps() {
        assert_eq!(catalog().total_steps(), 5);
        assert_eq!(LearningPathCatalog::default().total_steps(), 0);
    }
}
