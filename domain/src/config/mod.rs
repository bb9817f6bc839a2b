//! Resolver configuration value objects
//!
//! Persisted per-resolver settings (activation and weight) and the modes
//! used to filter the resolver list against them.

mod record;
mod return_mode;

pub use record::{ConfigUpdate, ResolverConfig};
pub use return_mode::ReturnMode;
