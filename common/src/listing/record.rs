use crate::listing::image::ImageRef;

/// A validated, stored listing.
///
/// Only constructible by validating a
/// [`ListingDraft`](crate::listing::draft::ListingDraft), so every instance
/// is known to carry the full required field set. Records are immutable once
/// admitted into a collection; there is no edit or delete flow in the current
/// feature set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    title: String,
    owner_name: String,
    worth: f64,
    meetup_location: String,
    description: String,
    image: Option<ImageRef>,
}

impl ListingRecord {
    pub(crate) fn new(
        title: String,
        owner_name: String,
        worth: f64,
        meetup_location: String,
        description: String,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            title,
            owner_name,
            worth,
            meetup_location,
            description,
            image,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// The item's worth in whole currency units, as parsed at validation.
    pub fn worth(&self) -> f64 {
        self.worth
    }

    pub fn meetup_location(&self) -> &str {
        &self.meetup_location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}
