//! # Listing Collection Store
//!
//! Ordered, append-only collection owning every accepted listing for the
//! lifetime of its session. Lookup is positional; identity is carried by a
//! surrogate [`ListingId`] assigned at append time so that references can
//! outlive positional churn if the collection ever supports deletion.

use std::fmt;

use swapmeet_common::listing::record::ListingRecord;

/// Surrogate identifier assigned to a listing when it is appended.
///
/// Identifiers are monotonically increasing within one store and never
/// reused. Anything that must keep pointing at a listing across future
/// collection changes should hold one of these rather than a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(u64);

/// 0-based index of a listing within the collection's insertion order.
///
/// Positions are a derived view: stable under appends, but not guaranteed to
/// survive deletion or reordering should those ever be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ListingStore {
    entries: Vec<(ListingId, ListingRecord)>,
    next_id: u64,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an accepted record at the end and returns its position.
    ///
    /// Single logical writer: the surrounding event dispatch serializes
    /// submissions, so this is never re-entered mid-append.
    pub fn append(&mut self, record: ListingRecord) -> Position {
        let id = ListingId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, record));
        Position(self.entries.len() - 1)
    }

    pub fn get(&self, position: Position) -> Option<&ListingRecord> {
        self.entries.get(position.0).map(|(_, record)| record)
    }

    pub fn id_at(&self, position: Position) -> Option<ListingId> {
        self.entries.get(position.0).map(|(id, _)| *id)
    }

    pub fn position_of(&self, id: ListingId) -> Option<Position> {
        self.entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .map(Position)
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.position_of(id).is_some()
    }

    /// Fresh, insertion-ordered read of the whole collection.
    pub fn all(&self) -> impl Iterator<Item = &ListingRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
