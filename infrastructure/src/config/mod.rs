//! Configuration file loading for group-context
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GROUP_CONTEXT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./group-context.toml` or `./.group-context.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/group-context/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEntity, FileResolutionConfig, FileStoreConfig,
    StoreBackend,
};
pub use loader::ConfigLoader;
