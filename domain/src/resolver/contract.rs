//! The group resolver contract

use std::collections::BTreeSet;

use crate::entity::Group;

/// Strategy that detects the relevant group from one signal source.
///
/// Implementations obtain their own signal (request, session, ...) when
/// they are constructed; the orchestrator only calls the methods below, in
/// this order: [`groups`](GroupResolver::groups), then
/// [`is_propagation_stopped`](GroupResolver::is_propagation_stopped) and
/// [`cache_context_ids`](GroupResolver::cache_context_ids).
///
/// Failures local to the signal source (an unknown entity type in a query
/// argument, a missing entity) must be turned into an empty result inside
/// the resolver. They are never reported to the orchestrator.
pub trait GroupResolver: Send {
    /// Groups found by this resolver, most relevant first.
    ///
    /// May be called more than once during a pass; implementations are
    /// expected to compute the result once and memoise it (see
    /// [`Resolution`](super::Resolution)).
    fn groups(&mut self) -> Vec<Group>;

    /// Declare that no further group resolving is necessary.
    ///
    /// Idempotent. Resolvers call this on themselves while computing their
    /// result when the signal is unambiguous (e.g. an exact route match).
    fn stop_propagation(&mut self);

    /// Whether lower-priority resolvers should be skipped
    fn is_propagation_stopped(&self) -> bool;

    /// Cache context IDs that influence this resolver's answer.
    ///
    /// Reported whether or not a group was found: "no group here" depends
    /// on the same inputs. Examples: `"route"`, `"url"`, `"user"`, `"site"`.
    fn cache_context_ids(&self) -> BTreeSet<String>;
}

/// Propagation flag for embedding in resolver implementations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Propagation {
    stopped: bool,
}

impl Propagation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
