//! Resolver registry port
//!
//! The registry is the source of truth for which resolvers *exist*. It is
//! populated by explicit registration at startup.

use group_context_domain::{DomainError, GroupResolver, ResolverDescriptor};

/// Port for enumerating and instantiating resolvers
pub trait ResolverRegistry: Send + Sync {
    /// Every known resolver, in discovery (registration) order
    fn descriptors(&self) -> Vec<ResolverDescriptor>;

    /// Build a fresh resolver instance for one resolution pass.
    ///
    /// Fails with [`DomainError::UnknownResolver`] when `id` is not registered.
    fn instantiate(&self, id: &str) -> Result<Box<dyn GroupResolver>, DomainError>;

    /// Check if a resolver is registered
    fn contains(&self, id: &str) -> bool {
        self.descriptors().iter().any(|d| d.id == id)
    }
}
