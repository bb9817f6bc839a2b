//! Application layer for group-context
//!
//! This crate contains the resolver-chain orchestrator and the port
//! definitions it consumes. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    config_store::{ResolverConfigStore, StoreError},
    entity_repository::EntityRepository,
    resolver_registry::ResolverRegistry,
};
pub use use_cases::context_handler::{ContextHandlerError, GroupContext, GroupContextHandler};
