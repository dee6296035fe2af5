use colored::*;
use swapmeet_common::config::Config;
use swapmeet_common::listing::record::ListingRecord;

pub type Detail = (String, ColoredString);

/// Details shown on every board row, expanded or not.
///
/// Mirrors the collapsed row of the listing board: meetup location plus a
/// marker when a photo is attached.
pub fn collapsed_details(record: &ListingRecord, _cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        "Where".to_string(),
        record.meetup_location().to_string().normal(),
    )];

    if let Some(image) = record.image() {
        details.push(("Photo".to_string(), image.as_str().cyan()));
    }

    details
}

/// Details for a row in its expanded/detail state.
pub fn expanded_details(record: &ListingRecord, cfg: &Config) -> Vec<Detail> {
    let mut details = collapsed_details(record, cfg);

    details.push(("About".to_string(), record.description().to_string().normal()));
    details.push(("Worth".to_string(), worth_label(record.worth())));
    details.push(owner_detail(record, cfg));

    details
}

pub fn owner_detail(record: &ListingRecord, cfg: &Config) -> Detail {
    let owner: ColoredString = if cfg.redact_owner {
        "<hidden>".dimmed()
    } else {
        record.owner_name().to_string().normal()
    };
    ("Owner".to_string(), owner)
}

fn worth_label(worth: f64) -> ColoredString {
    format!("${worth:.2}").yellow()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapmeet_common::listing::draft::ListingDraft;
    use swapmeet_common::listing::image::ImageRef;

    fn record_with_image() -> ListingRecord {
        let mut draft = ListingDraft::new();
        draft.title = "Bike".to_string();
        draft.owner_name = "Sam".to_string();
        draft.worth = "50".to_string();
        draft.meetup_location = "Park".to_string();
        draft.description = "Used bike".to_string();
        draft.attach_image(ImageRef::new("file:///tmp/bike.jpg"));
        draft.validate().unwrap()
    }

    #[test]
    fn test_collapsed_rows_show_location_and_photo_marker() {
        let cfg = Config::default();
        let details = collapsed_details(&record_with_image(), &cfg);

        let keys: Vec<&str> = details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Where", "Photo"]);
    }

    #[test]
    fn test_expanded_rows_add_description_worth_and_owner() {
        let cfg = Config::default();
        let details = expanded_details(&record_with_image(), &cfg);

        let keys: Vec<&str> = details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Where", "Photo", "About", "Worth", "Owner"]);
    }

    #[test]
    fn test_owner_redaction() {
        let cfg = Config {
            redact_owner: true,
            ..Config::default()
        };

        let (_, owner) = owner_detail(&record_with_image(), &cfg);
        assert!(!owner.to_string().contains("Sam"));
    }
}
