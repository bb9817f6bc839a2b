//! Domain layer for group-context
//!
//! This crate contains the resolver contract, entities, and the value
//! objects that describe resolver configuration. It has no dependencies on
//! storage or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Resolver**: a strategy that finds the relevant group from one signal
//!   (route, query arguments, session, ...). See [`GroupResolver`].
//! - **Weight**: integer sort priority of a resolver; lower runs earlier.
//! - **Propagation stop**: a resolver's declaration that its answer is final.
//! - **Cache context**: an identifier naming an input that affected a
//!   resolver's answer, used to compose cache keys downstream.

pub mod config;
pub mod core;
pub mod entity;
pub mod request;
pub mod resolver;

// Re-export commonly used types
pub use config::{ConfigUpdate, ResolverConfig, ReturnMode};
pub use crate::core::error::DomainError;
pub use entity::{Entity, Group};
pub use request::RequestContext;
pub use resolver::{GroupResolver, Propagation, Resolution, ResolverDescriptor};
