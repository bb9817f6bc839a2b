//! Resolver configuration store port
//!
//! Persisted records keyed by resolver identifier. The orchestrator only
//! needs load-one, load-all, create and save; it never deletes records.

use std::collections::BTreeMap;

use group_context_domain::ResolverConfig;
use thiserror::Error;

/// Errors raised by a configuration store
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create` was called for an identifier that already has a record
    #[error("Configuration record already exists: {0}")]
    AlreadyExists(String),

    /// Reading or writing the backing storage failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog could not be encoded
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// The stored catalog could not be decoded
    #[error("Failed to parse stored configuration: {0}")]
    Deserialize(String),
}

/// Port for persisted resolver configuration
///
/// Implementations are responsible for their own consistency under
/// concurrent writers. A `save` must be all-or-nothing: readers either see
/// the previous record or the new one.
pub trait ResolverConfigStore: Send + Sync {
    /// Load every record, keyed by resolver identifier
    fn load_all(&self) -> Result<BTreeMap<String, ResolverConfig>, StoreError>;

    /// Load the record for one resolver
    fn load(&self, id: &str) -> Result<Option<ResolverConfig>, StoreError>;

    /// Persist a new record; fails with [`StoreError::AlreadyExists`]
    fn create(&self, record: &ResolverConfig) -> Result<(), StoreError>;

    /// Persist an existing record, replacing all of its fields
    fn save(&self, record: &ResolverConfig) -> Result<(), StoreError>;
}
