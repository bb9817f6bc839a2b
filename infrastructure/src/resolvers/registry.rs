//! Static resolver registry
//!
//! The [`StaticResolverRegistry`] implements [`ResolverRegistry`] from an
//! explicit list of registrations. Each registration pairs a
//! [`ResolverDescriptor`] with a factory that builds a fresh resolver for
//! every resolution pass.
//!
//! # Usage
//!
//! ```ignore
//! let registry = StaticResolverRegistry::new()
//!     .register(RouteEntityResolver::descriptor(), move || {
//!         Box::new(RouteEntityResolver::new(request.clone(), entities.clone()))
//!     })?;
//!
//! let resolver = registry.instantiate("route_entity")?;
//! ```
//!
//! Discovery order is registration order. It decides the weights handed
//! out by reconciliation to resolvers that have no record yet.

use group_context_application::ResolverRegistry;
use group_context_domain::{DomainError, GroupResolver, ResolverDescriptor};
use tracing::trace;

/// Builds a resolver instance
pub type ResolverFactory = Box<dyn Fn() -> Box<dyn GroupResolver> + Send + Sync>;

struct Registration {
    descriptor: ResolverDescriptor,
    factory: ResolverFactory,
}

/// Registry populated by explicit registration
#[derive(Default)]
pub struct StaticResolverRegistry {
    registrations: Vec<Registration>,
}

impl StaticResolverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver factory under the descriptor's identifier
    pub fn register<F>(
        mut self,
        descriptor: ResolverDescriptor,
        factory: F,
    ) -> Result<Self, DomainError>
    where
        F: Fn() -> Box<dyn GroupResolver> + Send + Sync + 'static,
    {
        if self.contains(&descriptor.id) {
            return Err(DomainError::DuplicateResolver(descriptor.id));
        }

        trace!(resolver = %descriptor.id, "Registered resolver factory");
        self.registrations.push(Registration {
            descriptor,
            factory: Box::new(factory),
        });
        Ok(self)
    }

    /// Get a list of registered resolver IDs
    pub fn resolver_ids(&self) -> Vec<&str> {
        self.registrations
            .iter()
            .map(|r| r.descriptor.id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl ResolverRegistry for StaticResolverRegistry {
    fn descriptors(&self) -> Vec<ResolverDescriptor> {
        self.registrations
            .iter()
            .map(|r| r.descriptor.clone())
            .collect()
    }

    fn instantiate(&self, id: &str) -> Result<Box<dyn GroupResolver>, DomainError> {
        self.registrations
            .iter()
            .find(|r| r.descriptor.id == id)
            .map(|r| (r.factory)())
            .ok_or_else(|| DomainError::UnknownResolver(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.registrations.iter().any(|r| r.descriptor.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_context_domain::{Group, Propagation};
    use std::collections::BTreeSet;

    /// Resolver that never finds anything
    struct NullResolver {
        propagation: Propagation,
    }

    impl GroupResolver for NullResolver {
        fn groups(&mut self) -> Vec<Group> {
            Vec::new()
        }

        fn stop_propagation(&mut self) {
            self.propagation.stop();
        }

        fn is_propagation_stopped(&self) -> bool {
            self.propagation.is_stopped()
        }

        fn cache_context_ids(&self) -> BTreeSet<String> {
            BTreeSet::new()
        }
    }

    fn null_factory() -> Box<dyn GroupResolver> {
        Box::new(NullResolver {
            propagation: Propagation::new(),
        })
    }

    fn descriptor(id: &str) -> ResolverDescriptor {
        ResolverDescriptor::new(id, id, "")
    }

    #[test]
    fn test_descriptors_in_registration_order() {
        let registry = StaticResolverRegistry::new()
            .register(descriptor("zeta"), null_factory)
            .unwrap()
            .register(descriptor("alpha"), null_factory)
            .unwrap();

        assert_eq!(registry.resolver_ids(), vec!["zeta", "alpha"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = StaticResolverRegistry::new()
            .register(descriptor("alpha"), null_factory)
            .unwrap()
            .register(descriptor("alpha"), null_factory);

        assert!(matches!(result, Err(DomainError::DuplicateResolver(id)) if id == "alpha"));
    }

    #[test]
    fn test_instantiate_builds_fresh_instances() {
        let registry = StaticResolverRegistry::new()
            .register(descriptor("alpha"), null_factory)
            .unwrap();

        let mut first = registry.instantiate("alpha").unwrap();
        first.stop_propagation();
        let second = registry.instantiate("alpha").unwrap();

        assert!(first.is_propagation_stopped());
        assert!(!second.is_propagation_stopped());
    }

    #[test]
    fn test_instantiate_unknown() {
        let registry = StaticResolverRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.instantiate("nonexistent"),
            Err(DomainError::UnknownResolver(_))
        ));
    }
}
