//! Static resolver metadata

use serde::{Deserialize, Serialize};

/// What a registry knows about a resolver, independent of its activation.
///
/// The `id` is the join key to the persisted [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverDescriptor {
    /// Unique identifier (e.g., "request_query_argument")
    pub id: String,
    /// Short human-readable name
    pub label: String,
    /// What signal the resolver inspects
    pub description: String,
}

impl ResolverDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for ResolverDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
