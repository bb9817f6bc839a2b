//! Per-pass memo of a resolver's result

use crate::entity::Group;

/// Result of a resolver, computed at most once per resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Not computed yet
    #[default]
    Pending,
    /// Computed; no group was found
    Empty,
    /// Computed; never empty
    Resolved(Vec<Group>),
}

impl Resolution {
    pub fn from_groups(groups: Vec<Group>) -> Self {
        if groups.is_empty() {
            Self::Empty
        } else {
            Self::Resolved(groups)
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Groups of a computed resolution (empty while pending)
    pub fn groups(&self) -> Vec<Group> {
        match self {
            Self::Resolved(groups) => groups.clone(),
            Self::Pending | Self::Empty => Vec::new(),
        }
    }

    /// Run `resolve` on the first call only, then return the memoised groups
    pub fn get_or_resolve<F>(&mut self, resolve: F) -> Vec<Group>
    where
        F: FnOnce() -> Option<Group>,
    {
        if self.is_pending() {
            *self = Self::from_groups(resolve().into_iter().collect());
        }
        self.groups()
    }
}
