//! Resolves the group from query arguments on the request.
//!
//! Looks for `og-type` and `og-id` on the current request and, when both
//! point at an existing group entity, reports it. The answer is tentative:
//! propagation is not stopped, so a weak query hint never hides a stronger
//! signal from a lower-priority resolver that found nothing else.

use std::collections::BTreeSet;
use std::sync::Arc;

use group_context_application::EntityRepository;
use group_context_domain::{
    Group, GroupResolver, Propagation, RequestContext, Resolution, ResolverDescriptor,
};
use tracing::debug;

/// The query argument that holds the group entity type
pub const GROUP_TYPE_ARGUMENT: &str = "og-type";

/// The query argument that holds the group entity ID
pub const GROUP_ID_ARGUMENT: &str = "og-id";

/// Group resolver for `?og-type=<type>&og-id=<id>`
pub struct RequestQueryArgumentResolver {
    request: Arc<RequestContext>,
    entities: Arc<dyn EntityRepository>,
    resolution: Resolution,
    propagation: Propagation,
}

impl RequestQueryArgumentResolver {
    pub const ID: &'static str = "request_query_argument";

    pub fn new(request: Arc<RequestContext>, entities: Arc<dyn EntityRepository>) -> Self {
        Self {
            request,
            entities,
            resolution: Resolution::Pending,
            propagation: Propagation::new(),
        }
    }

    pub fn descriptor() -> ResolverDescriptor {
        ResolverDescriptor::new(
            Self::ID,
            "Group entity from query arguments",
            "Checks if the current request has query arguments that indicate the group context.",
        )
    }
}

fn resolve(request: &RequestContext, entities: &dyn EntityRepository) -> Option<Group> {
    let entity_type = request.query(GROUP_TYPE_ARGUMENT)?;
    let id = request.query(GROUP_ID_ARGUMENT)?;

    match entities.load(entity_type, id) {
        Ok(Some(entity)) => entities.as_group(entity),
        Ok(None) => None,
        Err(e) => {
            debug!(error = %e, "Ignoring group query arguments");
            None
        }
    }
}

impl GroupResolver for RequestQueryArgumentResolver {
    fn groups(&mut self) -> Vec<Group> {
        let request = &self.request;
        let entities = self.entities.as_ref();
        self.resolution
            .get_or_resolve(|| resolve(request, entities))
    }

    fn stop_propagation(&mut self) {
        self.propagation.stop();
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation.is_stopped()
    }

    fn cache_context_ids(&self) -> BTreeSet<String> {
        BTreeSet::from(["url".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InMemoryEntityRepository;
    use group_context_domain::Entity;

    fn entities() -> Arc<dyn EntityRepository> {
        Arc::new(
            InMemoryEntityRepository::new()
                .with_group_type("node", "community")
                .with_entity(Entity::new("node", "5", "community"))
                .with_entity(Entity::new("node", "6", "article")),
        )
    }

    fn resolver(uri: &str) -> RequestQueryArgumentResolver {
        let request = Arc::new(RequestContext::parse(uri).unwrap());
        RequestQueryArgumentResolver::new(request, entities())
    }

    #[test]
    fn test_resolves_group_from_arguments() {
        let groups = resolver("/anything?og-type=node&og-id=5").groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id(), "5");
    }

    #[test]
    fn test_does_not_stop_propagation() {
        let mut resolver = resolver("/?og-type=node&og-id=5");
        assert!(!resolver.groups().is_empty());
        assert!(!resolver.is_propagation_stopped());
    }

    #[test]
    fn test_both_arguments_required() {
        assert!(resolver("/?og-type=node").groups().is_empty());
        assert!(resolver("/?og-id=5").groups().is_empty());
        assert!(resolver("/").groups().is_empty());
    }

    #[test]
    fn test_invalid_entity_type_is_no_group() {
        assert!(resolver("/?og-type=spaceship&og-id=5").groups().is_empty());
    }

    #[test]
    fn test_missing_entity_is_no_group() {
        assert!(resolver("/?og-type=node&og-id=404").groups().is_empty());
    }

    #[test]
    fn test_non_group_entity_is_no_group() {
        assert!(resolver("/?og-type=node&og-id=6").groups().is_empty());
    }

    #[test]
    fn test_cache_context_without_group() {
        let mut resolver = resolver("/");
        assert!(resolver.groups().is_empty());
        assert_eq!(
            resolver.cache_context_ids(),
            BTreeSet::from(["url".to_string()])
        );
    }

    #[test]
    fn test_result_is_memoised() {
        let mut resolver = resolver("/?og-type=node&og-id=5");
        let first = resolver.groups();
        assert_eq!(resolver.groups(), first);
        assert!(matches!(resolver.resolution, Resolution::Resolved(_)));
    }

    #[test]
    fn test_descriptor() {
        let descriptor = RequestQueryArgumentResolver::descriptor();
        assert_eq!(descriptor.id, "request_query_argument");
        assert_eq!(descriptor.label, "Group entity from query arguments");
    }
}
