//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! Example configuration:
//!
//! ```toml
//! [store]
//! backend = "file"
//! path = ".group-context/resolvers.toml"
//!
//! [resolution]
//! sync_on_start = true
//!
//! [group_types]
//! node = ["community", "project"]
//!
//! [[entities]]
//! entity_type = "node"
//! id = "5"
//! bundle = "community"
//! label = "Rustaceans"
//! ```

use std::collections::BTreeMap;

use group_context_domain::Entity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the resolver catalog
pub const DEFAULT_STORE_PATH: &str = ".group-context/resolvers.toml";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("store.path cannot be empty when store.backend = \"file\"")]
    EmptyStorePath,

    #[error("entity #{0} has an empty entity_type or id")]
    IncompleteEntity(usize),
}

/// Where resolver configuration records are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// TOML file on disk (default)
    #[default]
    File,
    /// Process memory; lost on exit
    Memory,
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Path of the catalog file (file backend only)
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

/// Raw resolution configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolutionConfig {
    /// Create missing resolver records before running any command
    pub sync_on_start: bool,
}

impl Default for FileResolutionConfig {
    fn default() -> Self {
        Self {
            sync_on_start: true,
        }
    }
}

/// Raw entity fixture from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntity {
    pub entity_type: String,
    pub id: String,
    pub bundle: String,
    pub label: String,
}

impl FileEntity {
    pub fn to_entity(&self) -> Entity {
        Entity::new(&self.entity_type, &self.id, &self.bundle).with_label(&self.label)
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Resolver catalog storage
    pub store: FileStoreConfig,
    /// Resolution behaviour
    pub resolution: FileResolutionConfig,
    /// Entity type -> bundles that are groups
    pub group_types: BTreeMap<String, Vec<String>>,
    /// Known entities
    pub entities: Vec<FileEntity>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.store.backend == StoreBackend::File && self.store.path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyStorePath);
        }

        for (index, entity) in self.entities.iter().enumerate() {
            if entity.entity_type.trim().is_empty() || entity.id.trim().is_empty() {
                return Err(ConfigValidationError::IncompleteEntity(index));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[store]
backend = "memory"
path = "catalog.toml"

[resolution]
sync_on_start = false

[group_types]
node = ["community"]

[[entities]]
entity_type = "node"
id = "5"
bundle = "community"
label = "Rustaceans"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.path, "catalog.toml");
        assert!(!config.resolution.sync_on_start);
        assert_eq!(config.group_types["node"], vec!["community"]);
        assert_eq!(config.entities.len(), 1);
        assert_eq!(config.entities[0].to_entity().label, "Rustaceans");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[resolution]\nsync_on_start = false\n").unwrap();
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.path, DEFAULT_STORE_PATH);
        assert!(config.entities.is_empty());
    }

    #[test]
    fn test_validate_default() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_store_path() {
        let mut config = FileConfig::default();
        config.store.path = " ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyStorePath)
        ));

        config.store.backend = StoreBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_incomplete_entity() {
        let mut config = FileConfig::default();
        config.entities.push(FileEntity {
            entity_type: "node".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::IncompleteEntity(0))
        ));
    }
}
