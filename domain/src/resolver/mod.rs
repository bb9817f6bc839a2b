//! Group resolver domain module
//!
//! This module defines the contract every group-resolution strategy
//! implements, and the small value types resolvers use to keep their state.
//!
//! # Overview
//!
//! A resolver inspects one signal (the route, query arguments, the session)
//! and reports the groups it found there. Resolvers run in weight order; the
//! chain ends at the first resolver that reports a group, or at a resolver
//! that declares its (possibly empty) answer final.
//!
//! ```text
//! ┌────────────────┐   ┌────────────────┐   ┌────────────────┐
//! │ route_entity   │──▶│ query_argument │──▶│ ...            │
//! │ weight 0       │   │ weight 1       │   │ weight n       │
//! └────────────────┘   └────────────────┘   └────────────────┘
//!        │ non-empty groups() or is_propagation_stopped()
//!        ▼
//!      result
//! ```
//!
//! # Key Types
//!
//! - [`GroupResolver`] — the strategy contract
//! - [`ResolverDescriptor`] — static metadata a registry knows about a resolver
//! - [`Propagation`] — the "my answer is final" flag
//! - [`Resolution`] — per-pass memo of a resolver's result

pub mod contract;
pub mod descriptor;
pub mod resolution;

pub use contract::{GroupResolver, Propagation};
pub use descriptor::ResolverDescriptor;
pub use resolution::Resolution;
