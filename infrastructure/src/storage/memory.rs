//! In-memory resolver configuration store

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use group_context_application::{ResolverConfigStore, StoreError};
use group_context_domain::ResolverConfig;

/// Configuration store held in process memory.
///
/// Used by tests and by `store.backend = "memory"`.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    records: RwLock<BTreeMap<String, ResolverConfig>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records
    pub fn with_records(records: impl IntoIterator<Item = ResolverConfig>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResolverConfigStore for InMemoryConfigStore {
    fn load_all(&self) -> Result<BTreeMap<String, ResolverConfig>, StoreError> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn load(&self, id: &str) -> Result<Option<ResolverConfig>, StoreError> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    fn create(&self, record: &ResolverConfig) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id.clone()));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn save(&self, record: &ResolverConfig) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.id.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_context_domain::ResolverDescriptor;

    fn record(id: &str, weight: i32) -> ResolverConfig {
        ResolverConfig::from_descriptor(&ResolverDescriptor::new(id, id, ""), weight)
    }

    #[test]
    fn test_create_and_load() {
        let store = InMemoryConfigStore::new();
        store.create(&record("route_entity", 0)).unwrap();

        let loaded = store.load("route_entity").unwrap().unwrap();
        assert_eq!(loaded.weight, 0);
        assert!(store.load("missing").unwrap().is_none());
    }

    #[test]
    fn test_create_rejects_duplicates() {
        let store = InMemoryConfigStore::with_records([record("route_entity", 0)]);
        let err = store.create(&record("route_entity", 1)).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(id) if id == "route_entity"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_replaces_record() {
        let store = InMemoryConfigStore::with_records([record("route_entity", 0)]);
        let mut updated = record("route_entity", 3);
        updated.status = true;
        store.save(&updated).unwrap();

        assert_eq!(store.load("route_entity").unwrap(), Some(updated));
    }
}
