//! Resolver configuration stores
//!
//! Adapters implementing the
//! [`ResolverConfigStore`](group_context_application::ResolverConfigStore) port.

mod memory;
mod toml_file;

pub use memory::InMemoryConfigStore;
pub use toml_file::TomlFileConfigStore;
