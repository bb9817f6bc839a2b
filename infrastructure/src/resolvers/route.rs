//! Resolves the group from the canonical entity route.
//!
//! A request for `/{entity_type}/{id}` is the canonical page of that entity.
//! When the entity is a group this is an exact match, so the resolver stops
//! propagation.

use std::collections::BTreeSet;
use std::sync::Arc;

use group_context_application::EntityRepository;
use group_context_domain::{
    Group, GroupResolver, Propagation, RequestContext, Resolution, ResolverDescriptor,
};
use tracing::trace;

/// Group resolver for canonical entity routes
pub struct RouteEntityResolver {
    request: Arc<RequestContext>,
    entities: Arc<dyn EntityRepository>,
    resolution: Resolution,
    propagation: Propagation,
}

impl RouteEntityResolver {
    pub const ID: &'static str = "route_entity";

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
            "Group entity from route",
            "Checks if the current route is the canonical page of a group entity.",
        )
    }
}

fn resolve(request: &RequestContext, entities: &dyn EntityRepository) -> Option<Group> {
    let segments = request.path_segments();
    let [entity_type, id] = segments.as_slice() else {
        return None;
    };

    match entities.load(entity_type, id) {
        Ok(Some(entity)) => entities.as_group(entity),
        Ok(None) => None,
        Err(e) => {
            trace!(error = %e, path = request.path(), "Route is not an entity route");
            None
        }
    }
}

impl GroupResolver for RouteEntityResolver {
    fn groups(&mut self) -> Vec<Group> {
        let request = &self.request;
        let entities = self.entities.as_ref();
        let groups = self
            .resolution
            .get_or_resolve(|| resolve(request, entities));

        if !groups.is_empty() {
            self.stop_propagation();
        }
        groups
    }

    fn stop_propagation(&mut self) {
        self.propagation.stop();
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation.is_stopped()
    }

    fn cache_context_ids(&self) -> BTreeSet<String> {
        BTreeSet::from(["route".to_string()])
    }
}
