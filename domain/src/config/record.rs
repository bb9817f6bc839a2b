//! Persisted resolver configuration record

use serde::{Deserialize, Serialize};

use crate::resolver::ResolverDescriptor;

/// Activation status and priority of one resolver.
///
/// Records are keyed by the resolver identifier. The registry decides
/// which resolvers exist; records decide their order and activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Resolver identifier (same as [`ResolverDescriptor::id`])
    pub id: String,
    /// Label copied from the descriptor when the record was created
    #[serde(default)]
    pub label: String,
    /// Description copied from the descriptor when the record was created
    #[serde(default)]
    pub description: String,
    /// Whether the resolver takes part in resolution
    pub status: bool,
    /// Sort priority (lower runs earlier)
    pub weight: i32,
}

impl ResolverConfig {
    /// New disabled record for a freshly discovered resolver
    pub fn from_descriptor(descriptor: &ResolverDescriptor, weight: i32) -> Self {
        Self {
            id: descriptor.id.clone(),
            label: descriptor.label.clone(),
            description: descriptor.description.clone(),
            status: false,
            weight,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status
    }
}

/// Partial update of a [`ResolverConfig`]; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub status: Option<bool>,
    pub weight: Option<i32>,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Return a copy of `record` with every set field applied
    pub fn apply(&self, record: &ResolverConfig) -> ResolverConfig {
        let mut updated = record.clone();
        if let Some(status) = self.status {
            updated.status = status;
        }
        if let Some(weight) = self.weight {
            updated.weight = weight;
        }
        if let Some(label) = &self.label {
            updated.label = label.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        updated
    }
}
