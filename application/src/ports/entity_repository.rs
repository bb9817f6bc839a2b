//! Entity repository port
//!
//! Used by resolvers to turn identifiers found in a signal source into
//! entities, and to check whether an entity is a group.

use group_context_domain::{DomainError, Entity, Group};

/// Port for entity lookup and group-type checks
pub trait EntityRepository: Send + Sync {
    /// Load an entity by type and identifier.
    ///
    /// Returns `Ok(None)` when the type exists but the entity does not, and
    /// [`DomainError::InvalidEntityType`] when the type itself is unknown.
    fn load(&self, entity_type: &str, id: &str) -> Result<Option<Entity>, DomainError>;

    /// Whether entities of this type and bundle are groups
    fn is_group(&self, entity_type: &str, bundle: &str) -> bool;

    /// Wrap the entity as a [`Group`] if its type and bundle qualify
    fn as_group(&self, entity: Entity) -> Option<Group> {
        if self.is_group(&entity.entity_type, &entity.bundle) {
            Some(Group::new(entity))
        } else {
            None
        }
    }
}
