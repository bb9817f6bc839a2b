//! Group resolvers and the registry that exposes them
//!
//! | Resolver | Signal | Cache context | Stops propagation |
//! |----------|--------|---------------|-------------------|
//! | `route_entity` | `/{entity_type}/{id}` route | `route` | when a group is found |
//! | `request_query_argument` | `?og-type=..&og-id=..` | `url` | never |

mod query_argument;
mod registry;
mod route;

pub use query_argument::{GROUP_ID_ARGUMENT, GROUP_TYPE_ARGUMENT, RequestQueryArgumentResolver};
pub use registry::{ResolverFactory, StaticResolverRegistry};
pub use route::RouteEntityResolver;

use std::sync::Arc;

use group_context_application::EntityRepository;
use group_context_domain::{DomainError, RequestContext};

/// Registry with the built-in resolvers, bound to one request.
///
/// Discovery order: `route_entity`, then `request_query_argument`.
pub fn default_registry(
    request: Arc<RequestContext>,
    entities: Arc<dyn EntityRepository>,
) -> Result<StaticResolverRegistry, DomainError> {
    let route_request = request.clone();
    let route_entities = entities.clone();

    StaticResolverRegistry::new()
        .register(RouteEntityResolver::descriptor(), move || {
            Box::new(RouteEntityResolver::new(
                route_request.clone(),
                route_entities.clone(),
            ))
        })?
        .register(RequestQueryArgumentResolver::descriptor(), move || {
            Box::new(RequestQueryArgumentResolver::new(
                request.clone(),
                entities.clone(),
            ))
        })
}
