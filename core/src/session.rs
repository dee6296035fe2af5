//! # Listing Session
//!
//! The session-scoped context owning the collection store and the expansion
//! tracker. There are no process-wide singletons: construct as many
//! independent sessions as needed (tests do), and hand one to the
//! presentation layer.
//!
//! All operations run to completion in response to a discrete user action
//! and never block. The surrounding event dispatch serializes them; none of
//! the methods here are re-entered while another is in flight.

use swapmeet_common::error::ValidationError;
use swapmeet_common::filter::FilterCriteria;
use swapmeet_common::listing::draft::ListingDraft;
use swapmeet_common::listing::record::ListingRecord;
use swapmeet_common::success;

use crate::expansion::{ExpansionState, ExpansionTracker};
use crate::filter;
use crate::ports::outbound::distance_source::DistanceSource;
use crate::store::{ListingStore, Position};

/// One local browsing/selling session.
#[derive(Debug, Default)]
pub struct ListingSession {
    store: ListingStore,
    tracker: ExpansionTracker,
}

impl ListingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and, on success, admits it into the collection.
    ///
    /// The draft is left untouched either way; the submission flow decides
    /// when to clear the form, so a rejected draft keeps its state for
    /// correction and resubmission.
    pub fn submit(&mut self, draft: &ListingDraft) -> Result<Position, ValidationError> {
        let record = draft.validate()?;
        let title = record.title().to_string();
        let position = self.store.append(record);
        success!("Listing '{title}' accepted at row {position}");
        Ok(position)
    }

    /// Number of accepted listings.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Fresh, insertion-ordered read of every accepted listing.
    pub fn rows(&self) -> impl Iterator<Item = &ListingRecord> {
        self.store.all()
    }

    /// The record at `position`.
    ///
    /// Positions handed out by this session stay valid while the collection
    /// is append-only, so an out-of-range position can only mean broken
    /// coordination between store and tracker. That is a logic error and
    /// fails loudly rather than degrading into index drift.
    pub fn record_at(&self, position: Position) -> &ListingRecord {
        self.store.get(position).unwrap_or_else(|| {
            panic!(
                "listing position {position} out of range (collection holds {})",
                self.store.len()
            )
        })
    }

    /// Toggles the detail state of the row at `position`.
    ///
    /// Same invariant as [`ListingSession::record_at`]: callers pass
    /// positions this session handed out, so resolution cannot fail under
    /// correct coordination.
    pub fn toggle_row(&mut self, position: Position) -> ExpansionState {
        let id = self.store.id_at(position).unwrap_or_else(|| {
            panic!(
                "listing position {position} out of range (collection holds {})",
                self.store.len()
            )
        });
        self.tracker.toggle(id)
    }

    pub fn is_row_expanded(&self, position: Position) -> bool {
        match self.store.id_at(position) {
            Some(id) => self.tracker.is_expanded(id),
            None => false,
        }
    }

    pub fn expansion(&self) -> ExpansionState {
        self.tracker.state()
    }

    /// Narrowed, order-preserving read of the collection.
    ///
    /// Pass a [`DistanceSource`] when a location collaborator is available;
    /// without one the distance dimension admits everything.
    pub fn filtered_rows<'a>(
        &'a self,
        criteria: &FilterCriteria,
        distances: Option<&dyn DistanceSource>,
    ) -> Vec<&'a ListingRecord> {
        let predicate = filter::build_predicate(criteria, distances);
        filter::apply_filter(self.store.all(), predicate)
    }
}
