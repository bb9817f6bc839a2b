//! Group context handler use case
//!
//! The [`GroupContextHandler`] merges the resolvers known to a
//! [`ResolverRegistry`] with the records of a [`ResolverConfigStore`],
//! orders them by weight, and runs them until one of them answers.
//!
//! # Resolution
//!
//! 1. List the active resolvers ([`ReturnMode::OnlyActive`]), lowest weight first
//! 2. Instantiate each one and ask it for groups
//! 3. Stop at the first resolver that reports a group, returning its first group
//! 4. Stop with no group when a resolver finds nothing but has called
//!    [`stop_propagation`](group_context_domain::GroupResolver::stop_propagation)
//! 5. Otherwise move on; an exhausted chain resolves to no group
//!
//! Cache context IDs are collected from every resolver that ran, including
//! the ones that found nothing.
//!
//! # Reconciliation
//!
//! [`update_config_storage`](GroupContextHandler::update_config_storage)
//! creates a disabled record for every registered resolver that has none
//! yet. It never touches existing records, so running it twice is a no-op
//! the second time.
//!
//! # Usage
//!
//! ```ignore
//! let handler = GroupContextHandler::new(registry, store);
//! handler.update_config_storage()?;
//! handler.update_plugin("route_entity", &ConfigUpdate::new().with_status(true))?;
//!
//! if let Some(group) = handler.get_group()? {
//!     println!("Current group: {}", group);
//! }
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use group_context_domain::{
    ConfigUpdate, DomainError, Group, GroupResolver, ResolverConfig, ResolverDescriptor,
    ReturnMode,
};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::ports::config_store::{ResolverConfigStore, StoreError};
use crate::ports::resolver_registry::ResolverRegistry;

/// Errors that can occur while handling group context
#[derive(Error, Debug)]
pub enum ContextHandlerError {
    /// Unknown resolver or missing configuration record
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The configuration store failed; propagated unmodified
    #[error("Config store error: {0}")]
    Store(#[from] StoreError),
}

impl ContextHandlerError {
    pub fn is_unknown_resolver(&self) -> bool {
        matches!(self, Self::Domain(DomainError::UnknownResolver(_)))
    }

    /// Check if running reconciliation first would fix this error
    pub fn needs_sync(&self) -> bool {
        matches!(self, Self::Domain(e) if e.needs_sync())
    }
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupContext {
    /// The resolved group, if any
    pub group: Option<Group>,
    /// Resolver that ended the chain (by finding a group or stopping propagation)
    pub resolver_id: Option<String>,
    /// Union of the cache contexts of every resolver that ran
    pub cache_context_ids: BTreeSet<String>,
}

impl GroupContext {
    pub fn is_resolved(&self) -> bool {
        self.group.is_some()
    }
}

/// Orchestrates the group resolver chain and its persisted configuration
pub struct GroupContextHandler<R, S>
where
    R: ResolverRegistry + ?Sized,
    S: ResolverConfigStore + ?Sized,
{
    registry: Arc<R>,
    store: Arc<S>,
}

impl<R, S> GroupContextHandler<R, S>
where
    R: ResolverRegistry + ?Sized,
    S: ResolverConfigStore + ?Sized,
{
    pub fn new(registry: Arc<R>, store: Arc<S>) -> Self {
        Self { registry, store }
    }

    /// Resolve the most relevant group for the current context
    pub fn get_group(&self) -> Result<Option<Group>, ContextHandlerError> {
        Ok(self.resolve()?.group)
    }

    /// Run the resolver chain and report the group with its cache contexts
    pub fn resolve(&self) -> Result<GroupContext, ContextHandlerError> {
        let plugins = self.get_plugins(ReturnMode::OnlyActive)?;
        let mut context = GroupContext::default();

        for descriptor in &plugins {
            let mut resolver = self.get_plugin(&descriptor.id)?;
            let groups = resolver.groups();
            context
                .cache_context_ids
                .extend(resolver.cache_context_ids());

            if let Some(group) = groups.into_iter().next() {
                debug!(resolver = %descriptor.id, group = %group, "Group resolved");
                context.group = Some(group);
                context.resolver_id = Some(descriptor.id.clone());
                return Ok(context);
            }

            if resolver.is_propagation_stopped() {
                debug!(
                    resolver = %descriptor.id,
                    "Resolver stopped propagation without a group"
                );
                context.resolver_id = Some(descriptor.id.clone());
                return Ok(context);
            }

            trace!(resolver = %descriptor.id, "No group found, trying next resolver");
        }

        debug!(resolvers = plugins.len(), "No group resolved");
        Ok(context)
    }

    /// List resolvers filtered by `mode`, lowest weight first.
    ///
    /// Only registered resolvers are returned, even when a stale record
    /// references one that no longer exists. Ties in weight are broken by
    /// identifier; resolvers without a record keep discovery order and sort
    /// after configured ones.
    pub fn get_plugins(
        &self,
        mode: ReturnMode,
    ) -> Result<Vec<ResolverDescriptor>, ContextHandlerError> {
        let records = self.store.load_all()?;

        let mut plugins: Vec<ResolverDescriptor> = self
            .registry
            .descriptors()
            .into_iter()
            .filter(|descriptor| match mode {
                ReturnMode::All => true,
                ReturnMode::OnlyConfigured => records.contains_key(&descriptor.id),
                ReturnMode::OnlyActive => records
                    .get(&descriptor.id)
                    .is_some_and(ResolverConfig::is_enabled),
            })
            .collect();

        if !records.is_empty() {
            plugins.sort_by(|a, b| by_weight(&records, a, b));
        }

        Ok(plugins)
    }

    /// Instantiate a registered resolver
    pub fn get_plugin(&self, id: &str) -> Result<Box<dyn GroupResolver>, ContextHandlerError> {
        Ok(self.registry.instantiate(id)?)
    }

    /// Apply a partial update to a resolver's record and persist it.
    ///
    /// The record must exist; run [`update_config_storage`](Self::update_config_storage)
    /// first for newly registered resolvers. All fields are written in a
    /// single save.
    pub fn update_plugin(
        &self,
        id: &str,
        update: &ConfigUpdate,
    ) -> Result<ResolverConfig, ContextHandlerError> {
        let record = self
            .store
            .load(id)?
            .ok_or_else(|| DomainError::ConfigRecordNotFound(id.to_string()))?;

        let updated = update.apply(&record);
        self.store.save(&updated)?;

        info!(
            resolver = id,
            status = updated.status,
            weight = updated.weight,
            "Updated resolver configuration"
        );
        Ok(updated)
    }

    /// Create a disabled record for every registered resolver lacking one.
    ///
    /// New records get weights 0, 1, 2, ... in the order of
    /// `get_plugins(ReturnMode::All)`. The counter ignores existing records,
    /// so a new weight may equal an existing one; equal weights sort by id.
    /// Returns the records that were created.
    pub fn update_config_storage(&self) -> Result<Vec<ResolverConfig>, ContextHandlerError> {
        let plugins = self.get_plugins(ReturnMode::All)?;
        let existing = self.store.load_all()?;

        for id in existing.keys() {
            if !plugins.iter().any(|p| &p.id == id) {
                warn!(resolver = %id, "Configuration record references an unregistered resolver");
            }
        }

        let mut created = Vec::new();
        let mut weight = 0;
        for descriptor in &plugins {
            if existing.contains_key(&descriptor.id) {
                continue;
            }

            let record = ResolverConfig::from_descriptor(descriptor, weight);
            self.store.create(&record)?;
            info!(resolver = %record.id, weight, "Registered group resolver");

            created.push(record);
            weight += 1;
        }

        Ok(created)
    }
}

fn by_weight(
    records: &BTreeMap<String, ResolverConfig>,
    a: &ResolverDescriptor,
    b: &ResolverDescriptor,
) -> Ordering {
    match (records.get(&a.id), records.get(&b.id)) {
        (Some(x), Some(y)) => x.weight.cmp(&y.weight).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
