use crate::error::{RequiredField, ValidationError};
use crate::listing::image::ImageRef;
use crate::listing::record::ListingRecord;

/// An in-progress listing being composed by the user.
///
/// Field values arrive exactly as typed; nothing is trimmed or parsed until
/// [`ListingDraft::validate`] runs. The image slot is managed separately via
/// [`ListingDraft::attach_image`] because it is filled by a capture
/// collaborator rather than the form itself.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub owner_name: String,
    pub worth: String,
    pub meetup_location: String,
    pub description: String,
    image: Option<ImageRef>,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a captured image, replacing any previous one.
    ///
    /// The draft holds a single image slot; a later capture always wins.
    pub fn attach_image(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Resets every field, including the image slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the whole draft and produces a stored record on success.
    ///
    /// Succeeds iff title, owner name, worth, meetup location and description
    /// are all non-empty after trimming, and the worth parses as a
    /// non-negative finite number. The image slot never affects the outcome.
    ///
    /// Pure: the draft is left untouched on failure so the form keeps its
    /// state and the user can correct and resubmit.
    pub fn validate(&self) -> Result<ListingRecord, ValidationError> {
        let mut missing: Vec<RequiredField> = Vec::new();

        let checks = [
            (RequiredField::Title, self.title.as_str()),
            (RequiredField::OwnerName, self.owner_name.as_str()),
            (RequiredField::Worth, self.worth.as_str()),
            (RequiredField::MeetupLocation, self.meetup_location.as_str()),
            (RequiredField::Description, self.description.as_str()),
        ];

        for (field, value) in checks {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { missing });
        }

        let worth = parse_worth(&self.worth)?;

        Ok(ListingRecord::new(
            self.title.trim().to_string(),
            self.owner_name.trim().to_string(),
            worth,
            self.meetup_location.trim().to_string(),
            self.description.trim().to_string(),
            self.image.clone(),
        ))
    }
}

/// The capture layer constrains the worth input to numeric characters, but
/// drafts can also be built programmatically, so the model re-checks on its
/// own rather than trusting its callers.
fn parse_worth(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidWorth(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ListingDraft {
        ListingDraft {
            title: "Bike".to_string(),
            owner_name: "Sam".to_string(),
            worth: "50".to_string(),
            meetup_location: "Park".to_string(),
            description: "Used bike".to_string(),
            ..ListingDraft::default()
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        let record = complete_draft().validate().expect("draft should validate");

        assert_eq!(record.title(), "Bike");
        assert_eq!(record.owner_name(), "Sam");
        assert_eq!(record.worth(), 50.0);
        assert_eq!(record.meetup_location(), "Park");
        assert_eq!(record.description(), "Used bike");
        assert!(record.image().is_none());
    }

    #[test]
    fn test_empty_worth_is_a_missing_field() {
        let mut draft = complete_draft();
        draft.worth = String::new();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing_fields(), &[RequiredField::Worth]);
        assert_eq!(
            err.to_string(),
            "Please fill out all the fields before submitting."
        );
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let mut draft = complete_draft();
        draft.title = "   ".to_string();
        draft.description = "\n\t".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[RequiredField::Title, RequiredField::Description]
        );
    }

    #[test]
    fn test_fields_are_trimmed_into_the_record() {
        let mut draft = complete_draft();
        draft.title = "  Bike  ".to_string();
        draft.worth = " 50 ".to_string();

        let record = draft.validate().unwrap();
        assert_eq!(record.title(), "Bike");
        assert_eq!(record.worth(), 50.0);
    }

    #[test]
    fn test_image_never_affects_validation() {
        // A valid draft stays valid with an image attached.
        let mut draft = complete_draft();
        draft.attach_image(ImageRef::new("file:///tmp/bike.jpg"));
        let record = draft.validate().unwrap();
        assert_eq!(record.image().unwrap().as_str(), "file:///tmp/bike.jpg");

        // An incomplete draft stays invalid with an image attached.
        let mut draft = ListingDraft::new();
        draft.attach_image(ImageRef::new("file:///tmp/bike.jpg"));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_attach_image_is_last_write_wins() {
        let mut draft = complete_draft();
        draft.attach_image(ImageRef::new("file:///a.jpg"));
        draft.attach_image(ImageRef::new("file:///b.jpg"));

        assert_eq!(draft.image().unwrap().as_str(), "file:///b.jpg");
    }

    #[test]
    fn test_non_numeric_worth_is_rejected() {
        for bad in ["abc", "-5", "NaN", "inf", "$50"] {
            let mut draft = complete_draft();
            draft.worth = bad.to_string();

            match draft.validate() {
                Err(ValidationError::InvalidWorth(raw)) => assert_eq!(raw, bad),
                other => panic!("expected InvalidWorth for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decimal_worth_is_accepted() {
        let mut draft = complete_draft();
        draft.worth = "49.99".to_string();
        assert_eq!(draft.validate().unwrap().worth(), 49.99);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = complete_draft();
        draft.attach_image(ImageRef::new("camera://capture-1"));
        draft.clear();

        assert_eq!(draft, ListingDraft::new());
        assert!(draft.image().is_none());
    }
}
