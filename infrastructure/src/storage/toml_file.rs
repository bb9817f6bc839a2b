//! TOML file resolver configuration store
//!
//! The whole catalog lives in one file:
//!
//! ```toml
//! [resolvers.route_entity]
//! label = "Group entity from route"
//! description = "..."
//! status = true
//! weight = 0
//! ```
//!
//! Records are keyed by resolver id, so a catalog can hold at most one
//! record per resolver; a repeated table is a parse error.
//!
//! Every write replaces the file through a temporary sibling and a rename,
//! so a reader never sees a half-written catalog.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use group_context_application::{ResolverConfigStore, StoreError};
use group_context_domain::ResolverConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk layout of the catalog
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resolvers: BTreeMap<String, CatalogEntry>,
}

/// One `[resolvers.<id>]` table; the id is the table key
#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    label: String,
    #[serde(default)]
    description: String,
    status: bool,
    weight: i32,
}

impl CatalogEntry {
    fn into_record(self, id: String) -> ResolverConfig {
        ResolverConfig {
            id,
            label: self.label,
            description: self.description,
            status: self.status,
            weight: self.weight,
        }
    }
}

impl From<ResolverConfig> for CatalogEntry {
    fn from(record: ResolverConfig) -> Self {
        Self {
            label: record.label,
            description: record.description,
            status: record.status,
            weight: record.weight,
        }
    }
}

/// Configuration store persisted as a TOML file
pub struct TomlFileConfigStore {
    path: PathBuf,
    /// Serialises read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl TomlFileConfigStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, ResolverConfig>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let catalog: CatalogFile =
            toml::from_str(&content).map_err(|e| StoreError::Deserialize(e.to_string()))?;

        Ok(catalog
            .resolvers
            .into_iter()
            .map(|(id, entry)| (id.clone(), entry.into_record(id)))
            .collect())
    }

    fn write(&self, records: BTreeMap<String, ResolverConfig>) -> Result<(), StoreError> {
        let resolvers = records
            .into_iter()
            .map(|(id, record)| (id, CatalogEntry::from(record)))
            .collect();

        let content = toml::to_string_pretty(&CatalogFile { resolvers })
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), "Wrote resolver catalog");
        Ok(())
    }
}

impl ResolverConfigStore for TomlFileConfigStore {
    fn load_all(&self) -> Result<BTreeMap<String, ResolverConfig>, StoreError> {
        self.read()
    }

    fn load(&self, id: &str) -> Result<Option<ResolverConfig>, StoreError> {
        Ok(self.read()?.remove(id))
    }

    fn create(&self, record: &ResolverConfig) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.read()?;
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id.clone()));
        }
        records.insert(record.id.clone(), record.clone());
        self.write(records)
    }

    fn save(&self, record: &ResolverConfig) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.read()?;
        records.insert(record.id.clone(), record.clone());
        self.write(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_context_domain::ResolverDescriptor;

    fn record(id: &str, weight: i32) -> ResolverConfig {
        ResolverConfig::from_descriptor(
            &ResolverDescriptor::new(id, format!("{} label", id), "desc"),
            weight,
        )
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlFileConfigStore::new(dir.path().join("resolvers.toml"));

        assert!(store.load_all().unwrap().is_empty());
        assert!(store.load("route_entity").unwrap().is_none());
    }

    #[test]
    fn test_create_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resolvers.toml");

        TomlFileConfigStore::new(&path)
            .create(&record("route_entity", 0))
            .unwrap();

        let reopened = TomlFileConfigStore::new(&path);
        let loaded = reopened.load("route_entity").unwrap().unwrap();
        assert_eq!(loaded.label, "route_entity label");
        assert!(!loaded.status);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_create_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlFileConfigStore::new(dir.path().join("resolvers.toml"));

        store.create(&record("route_entity", 0)).unwrap();
        let err = store.create(&record("route_entity", 1)).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_updates_single_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlFileConfigStore::new(dir.path().join("resolvers.toml"));
        store.create(&record("route_entity", 0)).unwrap();
        store.create(&record("request_query_argument", 1)).unwrap();

        let mut updated = record("request_query_argument", 7);
        updated.status = true;
        store.save(&updated).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records["request_query_argument"], updated);
        assert_eq!(records["route_entity"].weight, 0);
    }

    #[test]
    fn test_reads_hand_written_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolvers.toml");
        fs::write(
            &path,
            "[resolvers.route_entity]\nstatus = true\nweight = 2\n",
        )
        .unwrap();

        let record = TomlFileConfigStore::new(&path)
            .load("route_entity")
            .unwrap()
            .unwrap();
        assert!(record.status);
        assert_eq!(record.weight, 2);
        assert!(record.label.is_empty());
    }

    #[test]
    fn test_repeated_resolver_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolvers.toml");
        let catalog = "[resolvers.route_entity]\nstatus = true\nweight = 0\n\n\
                       [resolvers.route_entity]\nstatus = false\nweight = 9\n";
        fs::write(&path, catalog).unwrap();

        let store = TomlFileConfigStore::new(&path);
        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Deserialize(_)));

        // A failed read must not rewrite the catalog
        assert!(store.save(&record("route_entity", 1)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), catalog);
    }

    #[test]
    fn test_written_catalog_is_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolvers.toml");
        let store = TomlFileConfigStore::new(&path);
        store.create(&record("route_entity", 3)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[resolvers.route_entity]"));
        assert!(!content.contains("id ="));
    }

    #[test]
    fn test_corrupt_catalog_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolvers.toml");
        fs::write(&path, "resolvers = 12").unwrap();

        let err = TomlFileConfigStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, StoreError::Deserialize(_)));
    }
}
