//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The identifier is not known to the resolver registry.
    #[error("Unknown group resolver: {0}")]
    UnknownResolver(String),

    /// No persisted configuration exists for the resolver yet.
    ///
    /// Run reconciliation (`sync`) before updating the record.
    #[error("No configuration record for resolver: {0}")]
    ConfigRecordNotFound(String),

    /// A signal source named an entity type that does not exist.
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// Two resolvers were registered under the same identifier.
    #[error("Group resolver already registered: {0}")]
    DuplicateResolver(String),
}

impl DomainError {
    /// Check if this error is fixed by running reconciliation first
    pub fn needs_sync(&self) -> bool {
        matches!(self, DomainError::ConfigRecordNotFound(_))
    }
}
