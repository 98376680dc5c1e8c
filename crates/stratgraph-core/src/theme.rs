//! Strategic themes: curated bundles of entity ids.

use crate::error::StrategyGraphError;
use crate::types::{Bilingual, EntityType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pressing a theme is for health-center leadership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = StrategyGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Urgency::Critical),
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            other => Err(StrategyGraphError::UnknownUrgency(other.to_string())),
        }
    }
}

/// A named bundle of content spanning every bundled entity type.
///
/// Themes are curated independently of the edge store; their members need
/// not be connected to each other by any edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicTheme {
    pub id: String,
    pub title: Bilingual,
    pub subtitle: Bilingual,
    pub description: Bilingual,
    pub icon: String,
    pub color: String,
    pub urgency: Urgency,
    #[serde(default)]
    pub case_study_ids: Vec<String>,
    #[serde(default)]
    pub economics_ids: Vec<String>,
    #[serde(default)]
    pub framework_ids: Vec<String>,
    #[serde(default)]
    pub okr_ids: Vec<String>,
    #[serde(default)]
    pub leader_ids: Vec<String>,
    pub foresight: Bilingual,
}

impl StrategicTheme {
    /// The id list bundling entities of the given type.
    ///
    /// Intel content is never theme-bundled, so it always gets an empty slice.
    pub fn ids_for(&self, entity_type: EntityType) -> &[String] {
        match entity_type {
            EntityType::CaseStudy => &self.case_study_ids,
            EntityType::Economics => &self.economics_ids,
            EntityType::Framework => &self.framework_ids,
            EntityType::Okr => &self.okr_ids,
            EntityType::Leader => &self.leader_ids,
            EntityType::Intel => &[],
        }
    }

    pub fn contains(&self, entity_type: EntityType, id: &str) -> bool {
        self.ids_for(entity_type).iter().any(|member| member == id)
    }

    /// Every member as `(type, id)`, grouped by type.
    pub fn members(&self) -> impl Iterator<Item = (EntityType, &str)> {
        EntityType::ALL
            .into_iter()
            .flat_map(move |t| self.ids_for(t).iter().map(move |id| (t, id.as_str())))
    }

    pub fn member_count(&self) -> usize {
        EntityType::ALL.iter().map(|t| self.ids_for(*t).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> StrategicTheme {
        StrategicTheme {
            id: "federal-survival".into(),
            title: Bilingual::new("Federal Survival", "Supervivencia Federal"),
            subtitle: Bilingual::default(),
            description: Bilingual::default(),
            icon: "shield".into(),
            color: "#b91c1c".into(),
            urgency: Urgency::Critical,
            case_study_ids: vec!["pureview-federal-dependency".into()],
            economics_ids: vec!["section-330-grants".into()],
            framework_ids: vec![],
            okr_ids: vec![],
            leader_ids: vec![],
            foresight: Bilingual::default(),
        }
    }

    #[test]
    fn ids_for_dispatches_on_type() {
        let t = theme();
        assert!(t.contains(EntityType::Economics, "section-330-grants"));
        assert!(!t.contains(EntityType::CaseStudy, "section-330-grants"));
        assert!(t.ids_for(EntityType::Intel).is_empty());
    }

    #[test]
    fn deserializes_camel_case_lists() {
        let json = r#"{
            "id": "t", "title": {"en": "T", "es": "T"},
            "subtitle": {"en": "", "es": ""}, "description": {"en": "", "es": ""},
            "icon": "i", "color": "c", "urgency": "high",
            "okrIds": ["diversify-revenue"],
            "foresight": {"en": "", "es": ""}
        }"#;
        let t: StrategicTheme = serde_json::from_str(json).unwrap();
        assert_eq!(t.okr_ids, vec!["diversify-revenue".to_string()]);
        assert!(t.leader_ids.is_empty());
        assert_eq!(t.member_count(), 1);
    }
}
