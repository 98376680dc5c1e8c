//! Shared types used across the knowledge graph crates.

use crate::error::StrategyGraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of content an entity reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    /// A documented health-center case study.
    CaseStudy,
    /// An economics concept (funding streams, payment models).
    Economics,
    /// An execution or strategy framework.
    Framework,
    /// An OKR template.
    Okr,
    /// A thought leader.
    Leader,
    /// A market intel brief. Never bundled into themes.
    Intel,
}

impl EntityType {
    /// All entity types in declaration order.
    pub const ALL: [EntityType; 6] = [
        EntityType::CaseStudy,
        EntityType::Economics,
        EntityType::Framework,
        EntityType::Okr,
        EntityType::Leader,
        EntityType::Intel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::CaseStudy => "case-study",
            EntityType::Economics => "economics",
            EntityType::Framework => "framework",
            EntityType::Okr => "okr",
            EntityType::Leader => "leader",
            EntityType::Intel => "intel",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = StrategyGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StrategyGraphError::UnknownEntityType(s.to_string()))
    }
}

/// A `(type, id)` pair identifying one piece of content without its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: String,
}

impl EntityRef {
    pub fn new(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self {
            entity_type,
            id: id.into(),
        }
    }

    /// Exact match on both type and id.
    pub fn matches(&self, entity_type: EntityType, id: &str) -> bool {
        self.entity_type == entity_type && self.id == id
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// The kind of relationship an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Implements,
    Demonstrates,
    Measures,
    Uses,
    Advocates,
    Created,
    Informs,
    Enables,
    Requires,
    Complements,
}

impl Relationship {
    /// All ten relationship types in declaration order.
    pub const ALL: [Relationship; 10] = [
        Relationship::Implements,
        Relationship::Demonstrates,
        Relationship::Measures,
        Relationship::Uses,
        Relationship::Advocates,
        Relationship::Created,
        Relationship::Informs,
        Relationship::Enables,
        Relationship::Requires,
        Relationship::Complements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Implements => "implements",
            Relationship::Demonstrates => "demonstrates",
            Relationship::Measures => "measures",
            Relationship::Uses => "uses",
            Relationship::Advocates => "advocates",
            Relationship::Created => "created",
            Relationship::Informs => "informs",
            Relationship::Enables => "enables",
            Relationship::Requires => "requires",
            Relationship::Complements => "complements",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = StrategyGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| StrategyGraphError::UnknownRelationship(s.to_string()))
    }
}

/// How central an edge's relationship is: 3 core, 2 supporting, 1 tangential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Strength(u8);

impl Strength {
    pub const TANGENTIAL: Strength = Strength(1);
    pub const SUPPORTING: Strength = Strength(2);
    pub const CORE: Strength = Strength(3);

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Strength {
    type Error = StrategyGraphError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=3).contains(&value) {
            Ok(Strength(value))
        } else {
            Err(StrategyGraphError::InvalidStrength(value))
        }
    }
}

impl From<Strength> for u8 {
    fn from(s: Strength) -> Self {
        s.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display locale for bilingual text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = StrategyGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(StrategyGraphError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Es => f.write_str("es"),
        }
    }
}

/// An English/Spanish text pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub es: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// A directed, typed, weighted relationship between two entities.
///
/// Edges are directional in the data but traversable both ways when
/// collecting related content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEdge {
    pub from: EntityRef,
    pub to: EntityRef,
    pub relationship: Relationship,
    pub strength: Strength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Bilingual>,
}

impl KnowledgeEdge {
    pub fn new(from: EntityRef, to: EntityRef, relationship: Relationship, strength: Strength) -> Self {
        Self {
            from,
            to,
            relationship,
            strength,
            context: None,
        }
    }

    pub fn with_context(mut self, context: Bilingual) -> Self {
        self.context = Some(context);
        self
    }

    /// Whether either endpoint is the given entity.
    pub fn touches(&self, entity_type: EntityType, id: &str) -> bool {
        self.from.matches(entity_type, id) || self.to.matches(entity_type, id)
    }

    /// The endpoint opposite the queried one. A self-loop returns itself.
    pub fn other_endpoint(&self, entity_type: EntityType, id: &str) -> &EntityRef {
        if self.from.matches(entity_type, id) {
            &self.to
        } else {
            &self.from
        }
    }
}

/// One row of related content: the neighbor reached through one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedContent {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: String,
    pub relationship: Relationship,
    pub strength: Strength,
}

impl RelatedContent {
    pub fn entity(&self) -> EntityRef {
        EntityRef::new(self.entity_type, self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips_through_str() {
        for t in EntityType::ALL {
            assert_eq!(t.as_str().parse::<EntityType>().unwrap(), t);
        }
        assert!("blog-post".parse::<EntityType>().is_err());
    }

    #[test]
    fn entity_ref_serializes_with_type_field() {
        let r = EntityRef::new(EntityType::CaseStudy, "pureview-federal-dependency");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "case-study");
        assert_eq!(json["id"], "pureview-federal-dependency");
    }

    #[test]
    fn strength_rejects_out_of_range() {
        assert!(Strength::try_from(0u8).is_err());
        assert!(Strength::try_from(4u8).is_err());
        assert_eq!(Strength::try_from(2u8).unwrap(), Strength::SUPPORTING);

        let bad = r#"{"from":{"type":"okr","id":"a"},"to":{"type":"okr","id":"b"},"relationship":"uses","strength":5}"#;
        assert!(serde_json::from_str::<KnowledgeEdge>(bad).is_err());
    }

    #[test]
    fn relationship_has_ten_values() {
        assert_eq!(Relationship::ALL.len(), 10);
        assert_eq!("complements".parse::<Relationship>().unwrap(), Relationship::Complements);
    }

    #[test]
    fn other_endpoint_picks_opposite_side() {
        let edge = KnowledgeEdge::new(
            EntityRef::new(EntityType::Leader, "richard-rumelt"),
            EntityRef::new(EntityType::Framework, "rumelt-good-strategy"),
            Relationship::Created,
            Strength::CORE,
        );
        assert_eq!(
            edge.other_endpoint(EntityType::Framework, "rumelt-good-strategy").id,
            "richard-rumelt"
        );
        assert_eq!(
            edge.other_endpoint(EntityType::Leader, "richard-rumelt").id,
            "rumelt-good-strategy"
        );
    }

    #[test]
    fn bilingual_selects_locale() {
        let text = Bilingual::new("Strategy", "Estrategia");
        assert_eq!(text.get(Locale::En), "Strategy");
        assert_eq!(text.get(Locale::Es), "Estrategia");
    }
}
