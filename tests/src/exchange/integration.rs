#![cfg(test)]
use swapmeet_common::error::RequiredField;
use swapmeet_common::filter::{FilterCriteria, WorthBound};
use swapmeet_common::listing::draft::ListingDraft;
use swapmeet_core::expansion::ExpansionState;
use swapmeet_core::session::ListingSession;
use swapmeet_core::store::Position;

fn draft(title: &str, owner: &str, worth: &str) -> ListingDraft {
    let mut draft = ListingDraft::new();
    draft.title = title.to_string();
    draft.owner_name = owner.to_string();
    draft.worth = worth.to_string();
    draft.meetup_location = "Central Park".to_string();
    draft.description = format!("{title} in good shape");
    draft
}

/// Walks the full path the terminal front-end drives: submit three listings,
/// read the board back, then narrow it by worth.
#[test]
fn submit_three_listings_then_filter_by_worth() {
    let mut session = ListingSession::new();

    session.submit(&draft("Lamp", "Ana", "10")).unwrap();
    session.submit(&draft("Bike", "Sam", "50")).unwrap();
    session.submit(&draft("Chair", "Kim", "30")).unwrap();

    assert_eq!(session.len(), 3);
    let titles: Vec<&str> = session.rows().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Lamp", "Bike", "Chair"]);

    let criteria = FilterCriteria {
        worth: Some(WorthBound::Between {
            min: Some(20.0),
            max: Some(100.0),
        }),
        ..FilterCriteria::none()
    };
    let kept = session.filtered_rows(&criteria, None);

    // Insertion order survives filtering: the 30 stays listed after the 50.
    let worths: Vec<f64> = kept.iter().map(|r| r.worth()).collect();
    assert_eq!(worths, vec![50.0, 30.0]);
}

#[test]
fn expansion_follows_exactly_one_row() {
    let mut session = ListingSession::new();
    session.submit(&draft("Lamp", "Ana", "10")).unwrap();
    session.submit(&draft("Bike", "Sam", "50")).unwrap();

    let first = Position::new(0);
    let second = Position::new(1);

    assert_eq!(session.expansion(), ExpansionState::Collapsed);

    session.toggle_row(first);
    assert!(session.is_row_expanded(first));

    session.toggle_row(second);
    assert!(session.is_row_expanded(second));
    assert!(!session.is_row_expanded(first));

    session.toggle_row(second);
    assert_eq!(session.expansion(), ExpansionState::Collapsed);
}

#[test]
fn rejected_submission_changes_nothing() {
    let mut session = ListingSession::new();
    session.submit(&draft("Lamp", "Ana", "10")).unwrap();

    let mut incomplete = draft("Bike", "Sam", "50");
    incomplete.meetup_location = "  ".to_string();

    let err = session.submit(&incomplete).unwrap_err();
    assert_eq!(err.missing_fields(), &[RequiredField::MeetupLocation]);
    assert_eq!(
        err.to_string(),
        "Please fill out all the fields before submitting."
    );

    // The board is untouched and the form kept its state.
    assert_eq!(session.len(), 1);
    assert_eq!(incomplete.title, "Bike");

    incomplete.meetup_location = "Main Square".to_string();
    assert!(session.submit(&incomplete).is_ok());
    assert_eq!(session.len(), 2);
}

#[test]
fn independent_sessions_share_nothing() {
    let mut selling = ListingSession::new();
    let mut browsing = ListingSession::new();

    let position = selling.submit(&draft("Lamp", "Ana", "10")).unwrap();
    selling.toggle_row(position);

    assert!(browsing.is_empty());
    assert_eq!(browsing.expansion(), ExpansionState::Collapsed);

    browsing.submit(&draft("Bike", "Sam", "50")).unwrap();
    assert_eq!(selling.len(), 1);
    assert_eq!(browsing.len(), 1);
}
