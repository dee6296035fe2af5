//! # Expansion State Tracker
//!
//! At most one listing is in its expanded/detail state at any time. The
//! tracker holds the listing's identity rather than its position, so the
//! tracked selection stays meaningful if the collection ever supports
//! deletion or reordering.

use crate::store::{ListingId, ListingStore};

/// Which listing, if any, is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded(ListingId),
}

/// Tracks the single expanded listing for one session.
#[derive(Debug, Default)]
pub struct ExpansionTracker {
    state: ExpansionState,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Selecting the already-expanded listing collapses it; selecting any
    /// other listing moves the expansion there.
    pub fn toggle(&mut self, id: ListingId) -> ExpansionState {
        self.state = match self.state {
            ExpansionState::Expanded(current) if current == id => ExpansionState::Collapsed,
            _ => ExpansionState::Expanded(id),
        };
        self.state
    }

    pub fn is_expanded(&self, id: ListingId) -> bool {
        self.state == ExpansionState::Expanded(id)
    }

    pub fn collapse(&mut self) {
        self.state = ExpansionState::Collapsed;
    }

    /// Resets to collapsed if the tracked listing no longer resolves in the
    /// store. A stale reference here would corrupt the row/detail mapping,
    /// so the tracker re-checks instead of trusting its callers.
    pub fn prune(&mut self, store: &ListingStore) {
        if let ExpansionState::Expanded(id) = self.state {
            if !store.contains(id) {
                self.state = ExpansionState::Collapsed;
            }
        }
    }
}
