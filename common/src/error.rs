use thiserror::Error;

/// A required field of a listing draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Title,
    OwnerName,
    Worth,
    MeetupLocation,
    Description,
}

impl RequiredField {
    /// The label the composition form shows for this field.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Title => "Item title",
            RequiredField::OwnerName => "Your name",
            RequiredField::Worth => "Worth($)",
            RequiredField::MeetupLocation => "Location",
            RequiredField::Description => "Description",
        }
    }
}

/// Why a draft was rejected at submission time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required fields were empty after trimming.
    ///
    /// The user-facing message is deliberately consolidated: the submission
    /// flow reports the incomplete set as a whole instead of pinpointing
    /// fields. Callers that need the exact set can use
    /// [`ValidationError::missing_fields`].
    #[error("Please fill out all the fields before submitting.")]
    MissingFields { missing: Vec<RequiredField> },

    /// The worth field was filled but is not a non-negative finite number.
    #[error("item worth must be a non-negative number, got '{0}'")]
    InvalidWorth(String),
}

impl ValidationError {
    /// The required fields that were empty, if any.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields { missing } => missing,
            ValidationError::InvalidWorth(_) => &[],
        }
    }
}
