//! Entity domain module
//!
//! Entities are the things a resolver can find on a request: a node, a
//! user, a taxonomy term. Only entities whose `(entity_type, bundle)` pair is
//! registered as a group type can become a [`Group`].

pub mod entities;

pub use entities::{Entity, Group};
