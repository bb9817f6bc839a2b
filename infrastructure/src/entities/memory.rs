//! In-memory entity repository
//!
//! Holds the entities and group types declared in the configuration file.
//! An entity type is known when at least one entity of that type exists or
//! when it appears in `group_types`.

use std::collections::{BTreeMap, BTreeSet};

use group_context_application::EntityRepository;
use group_context_domain::{DomainError, Entity};

use crate::config::FileConfig;

/// Entity repository backed by maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityRepository {
    entities: BTreeMap<(String, String), Entity>,
    group_types: BTreeMap<String, BTreeSet<String>>,
}

impl InMemoryEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the repository from the `[group_types]` and `[[entities]]` sections
    pub fn from_config(config: &FileConfig) -> Self {
        let mut repository = Self::new();
        for (entity_type, bundles) in &config.group_types {
            for bundle in bundles {
                repository = repository.with_group_type(entity_type, bundle);
            }
        }
        for entity in &config.entities {
            repository = repository.with_entity(entity.to_entity());
        }
        repository
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities
            .insert((entity.entity_type.clone(), entity.id.clone()), entity);
        self
    }

    /// Declare that `bundle` entities of `entity_type` are groups
    pub fn with_group_type(mut self, entity_type: &str, bundle: &str) -> Self {
        self.group_types
            .entry(entity_type.to_string())
            .or_default()
            .insert(bundle.to_string());
        self
    }

    pub fn entity_types(&self) -> BTreeSet<&str> {
        self.entities
            .keys()
            .map(|(entity_type, _)| entity_type.as_str())
            .chain(self.group_types.keys().map(String::as_str))
            .collect()
    }

    fn has_entity_type(&self, entity_type: &str) -> bool {
        self.group_types.contains_key(entity_type)
            || self.entities.keys().any(|(t, _)| t == entity_type)
    }
}

impl EntityRepository for InMemoryEntityRepository {
    fn load(&self, entity_type: &str, id: &str) -> Result<Option<Entity>, DomainError> {
        if !self.has_entity_type(entity_type) {
            return Err(DomainError::InvalidEntityType(entity_type.to_string()));
        }

        Ok(self
            .entities
            .get(&(entity_type.to_string(), id.to_string()))
            .cloned())
    }

    fn is_group(&self, entity_type: &str, bundle: &str) -> bool {
        self.group_types
            .get(entity_type)
            .is_some_and(|bundles| bundles.contains(bundle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileEntity;

    fn repository() -> InMemoryEntityRepository {
        InMemoryEntityRepository::new()
            .with_group_type("node", "community")
            .with_entity(Entity::new("node", "5", "community"))
            .with_entity(Entity::new("node", "6", "article"))
            .with_entity(Entity::new("user", "1", "user"))
    }

    #[test]
    fn test_load_existing_entity() {
        let entity = repository().load("node", "5").unwrap().unwrap();
        assert_eq!(entity.bundle, "community");
    }

    #[test]
    fn test_load_missing_entity_of_known_type() {
        assert_eq!(repository().load("node", "404").unwrap(), None);
        assert_eq!(repository().load("user", "2").unwrap(), None);
    }

    #[test]
    fn test_load_unknown_type() {
        let err = repository().load("spaceship", "1").unwrap_err();
        assert_eq!(err, DomainError::InvalidEntityType("spaceship".into()));
    }

    #[test]
    fn test_is_group() {
        let repository = repository();
        assert!(repository.is_group("node", "community"));
        assert!(!repository.is_group("node", "article"));
        assert!(!repository.is_group("user", "user"));
    }

    #[test]
    fn test_as_group() {
        let repository = repository();
        let group_entity = repository.load("node", "5").unwrap().unwrap();
        let article = repository.load("node", "6").unwrap().unwrap();

        assert!(repository.as_group(group_entity).is_some());
        assert!(repository.as_group(article).is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = FileConfig::default();
        config
            .group_types
            .insert("taxonomy_term".to_string(), vec!["team".to_string()]);
        config.entities.push(FileEntity {
            entity_type: "taxonomy_term".to_string(),
            id: "3".to_string(),
            bundle: "team".to_string(),
            label: "Core team".to_string(),
        });

        let repository = InMemoryEntityRepository::from_config(&config);
        let entity = repository.load("taxonomy_term", "3").unwrap().unwrap();
        assert_eq!(entity.label, "Core team");
        assert!(repository.is_group("taxonomy_term", "team"));
        assert_eq!(
            repository.entity_types().into_iter().collect::<Vec<_>>(),
            vec!["taxonomy_term"]
        );
    }
}
