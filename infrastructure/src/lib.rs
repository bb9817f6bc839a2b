//! Infrastructure layer for group-context
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the built-in group resolvers, and
//! configuration file loading.

pub mod config;
pub mod entities;
pub mod resolvers;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEntity, FileResolutionConfig,
    FileStoreConfig, StoreBackend,
};
pub use entities::InMemoryEntityRepository;
pub use resolvers::{
    RequestQueryArgumentResolver, RouteEntityResolver, StaticResolverRegistry, default_registry,
};
pub use storage::{InMemoryConfigStore, TomlFileConfigStore};
