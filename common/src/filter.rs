//! # Filter Criteria
//!
//! The value object a browse surface fills in to narrow the listing
//! collection. Each dimension is optional; absence means no constraint on
//! that dimension. Combining populated dimensions into a single predicate is
//! the filter engine's job, not this type's.

/// Inclusive bound on a listing's worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorthBound {
    /// Worth within `min..=max`; either side may be left open.
    Between { min: Option<f64>, max: Option<f64> },
    /// Worth equal to the given amount.
    Exactly(f64),
}

impl WorthBound {
    /// Whether the given worth satisfies this bound. Both ends are inclusive.
    pub fn admits(&self, worth: f64) -> bool {
        match *self {
            WorthBound::Between { min, max } => {
                min.is_none_or(|m| worth >= m) && max.is_none_or(|m| worth <= m)
            }
            WorthBound::Exactly(amount) => worth == amount,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Bound on the item's worth.
    pub worth: Option<WorthBound>,

    /// Requested category.
    ///
    /// Provisional: listings carry no category field yet, so a populated
    /// category currently constrains nothing. The dimension is declared so
    /// browse surfaces can already collect it.
    pub category: Option<String>,

    /// Maximum distance to the meetup location, in kilometers.
    ///
    /// Distances are supplied per record by an external source; the core
    /// never computes geodesy itself.
    pub max_distance_km: Option<f64>,
}

impl FilterCriteria {
    pub fn none() -> Self {
        Self::default()
    }

    /// True when no dimension is populated, i.e. the filter passes everything.
    pub fn is_unconstrained(&self) -> bool {
        self.worth.is_none() && self.category.is_none() && self.max_distance_km.is_none()
    }
}
