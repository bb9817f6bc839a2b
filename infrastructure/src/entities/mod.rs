//! Entity repositories
//!
//! Adapters implementing the
//! [`EntityRepository`](group_context_application::EntityRepository) port.

mod memory;

pub use memory::InMemoryEntityRepository;
