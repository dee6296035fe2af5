use swapmeet_common::listing::record::ListingRecord;

/// Supplies precomputed distances to meetup locations.
///
/// Geodesy (origin point, units, geocoding) lives with the location
/// collaborator; the filter engine only consumes finished numbers.
pub trait DistanceSource {
    /// Distance to the record's meetup location in kilometers, if known.
    fn distance_km(&self, record: &ListingRecord) -> Option<f64>;
}
