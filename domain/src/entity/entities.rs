//! Entity domain entities

use serde::{Deserialize, Serialize};

/// Reference to a stored entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type (e.g., "node", "taxonomy_term")
    pub entity_type: String,
    /// Entity identifier, unique within its type
    pub id: String,
    /// Bundle (sub-type) of the entity (e.g., "community")
    pub bundle: String,
    /// Human-readable label
    #[serde(default)]
    pub label: String,
}

impl Entity {
    pub fn new(
        entity_type: impl Into<String>,
        id: impl Into<String>,
        bundle: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            bundle: bundle.into(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Canonical path of the entity (`/{entity_type}/{id}`)
    pub fn canonical_path(&self) -> String {
        format!("/{}/{}", self.entity_type, self.id)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// An entity that has been confirmed to be a group.
///
/// Opaque to the orchestrator: it is produced by a resolver and handed to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(Entity);

impl Group {
    /// Wrap an entity that the caller has checked against the group types
    pub fn new(entity: Entity) -> Self {
        Self(entity)
    }

    pub fn entity(&self) -> &Entity {
        &self.0
    }

    pub fn entity_type(&self) -> &str {
        &self.0.entity_type
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }

    pub fn into_entity(self) -> Entity {
        self.0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_path() {
        let entity = Entity::new("node", "5", "community");
        assert_eq!(entity.canonical_path(), "/node/5");
    }

    #[test]
    fn test_group_display_matches_entity() {
        let group = Group::new(Entity::new("node", "5", "community").with_label("Rustaceans"));
        assert_eq!(group.to_string(), "node:5");
        assert_eq!(group.label(), "Rustaceans");
    }

    #[test]
    fn test_group_serializes_as_entity() {
        let group = Group::new(Entity::new("node", "5", "community"));
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["entity_type"], "node");
        assert_eq!(json["bundle"], "community");
    }
}
