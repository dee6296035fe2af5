//! # Filter Predicate Engine
//!
//! Combines the populated dimensions of a [`FilterCriteria`] into one
//! conjunctive predicate and applies it to an ordered read of the
//! collection. Filtering is pure and never reorders survivors.

use swapmeet_common::filter::FilterCriteria;
use swapmeet_common::listing::record::ListingRecord;

use crate::ports::outbound::distance_source::DistanceSource;

/// Builds a single predicate out of `criteria`.
///
/// Each populated dimension contributes an AND constraint; an unset
/// dimension admits every record. The optional `distances` source backs the
/// distance dimension; without one that dimension cannot constrain anything.
pub fn build_predicate<'a>(
    criteria: &'a FilterCriteria,
    distances: Option<&'a dyn DistanceSource>,
) -> impl Fn(&ListingRecord) -> bool + 'a {
    move |record| {
        worth_dimension(criteria, record)
            && category_dimension(criteria, record)
            && distance_dimension(criteria, distances, record)
    }
}

/// Applies `predicate` to an insertion-ordered read of the collection.
///
/// Survivors keep their relative order from the input.
pub fn apply_filter<'a>(
    records: impl Iterator<Item = &'a ListingRecord>,
    predicate: impl Fn(&ListingRecord) -> bool,
) -> Vec<&'a ListingRecord> {
    records.filter(|record| predicate(record)).collect()
}

fn worth_dimension(criteria: &FilterCriteria, record: &ListingRecord) -> bool {
    match criteria.worth {
        Some(bound) => bound.admits(record.worth()),
        None => true,
    }
}

/// Listings carry no category field yet, so a requested category constrains
/// nothing. Declared so the dimension has a seam once the record model grows
/// the field.
fn category_dimension(_criteria: &FilterCriteria, _record: &ListingRecord) -> bool {
    true
}

/// A record the source cannot place is admitted: the dimension constrains
/// only listings with a known distance.
fn distance_dimension(
    criteria: &FilterCriteria,
    distances: Option<&dyn DistanceSource>,
    record: &ListingRecord,
) -> bool {
    let Some(max_km) = criteria.max_distance_km else {
        return true;
    };
    let Some(source) = distances else {
        return true;
    };
    match source.distance_km(record) {
        Some(km) => km <= max_km,
        None => true,
    }
}
