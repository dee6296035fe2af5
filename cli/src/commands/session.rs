use anyhow::Result;
use colored::*;
use console::Term;

use swapmeet_common::config::Config;
use swapmeet_common::error::RequiredField;
use swapmeet_common::filter::{FilterCriteria, WorthBound};
use swapmeet_common::listing::draft::ListingDraft;
use swapmeet_common::{info, warn};
use swapmeet_core::capture;
use swapmeet_core::filter;
use swapmeet_core::session::ListingSession;
use swapmeet_core::store::Position;

use crate::capture::camera::CameraCapture;
use crate::capture::gallery::GalleryPick;
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

/// Runs one interactive exchange board session.
///
/// Everything lives in process memory; closing the session discards the
/// board.
pub async fn session(cfg: &Config) -> Result<()> {
    let term = Term::stdout();
    let mut session = ListingSession::new();
    let mut criteria = FilterCriteria::none();

    info!("Board opened; listings live for this run only");

    loop {
        mprint!();
        print::print_status("[l]ist item  [b]rowse  [f]ilter  [t]oggle <row>  [q]uit");

        let line = term.read_line()?;
        let input = line.trim().to_ascii_lowercase();

        match input.as_str() {
            "l" => compose_listing(&term, &mut session).await?,
            "b" => browse(&session, &criteria, cfg),
            "f" => {
                criteria = prompt_criteria(&term, cfg)?;
                browse(&session, &criteria, cfg);
            }
            "q" | "quit" => break,
            other => {
                if let Some(row) = other.strip_prefix('t') {
                    toggle(row.trim(), &mut session, &criteria, cfg);
                } else if !other.is_empty() {
                    warn!("Unknown choice '{other}'");
                }
            }
        }
    }

    print::end_of_program();
    Ok(())
}

/// Field-by-field composition of a new listing.
///
/// On a rejected submission the draft keeps its state and the user corrects
/// it in place; the form is only cleared after the listing is accepted.
async fn compose_listing(term: &Term, session: &mut ListingSession) -> Result<()> {
    let mut draft = ListingDraft::new();

    loop {
        prompt_fields(term, &mut draft)?;
        prompt_image(term, &mut draft).await?;

        match session.submit(&draft) {
            Ok(_) => {
                draft.clear();
                return Ok(());
            }
            Err(err) => {
                warn!("{err}");
                print::print_status("press enter to edit the draft, or type 'x' to discard it");
                if term.read_line()?.trim().eq_ignore_ascii_case("x") {
                    return Ok(());
                }
            }
        }
    }
}

fn prompt_fields(term: &Term, draft: &mut ListingDraft) -> Result<()> {
    draft.title = prompt_field(term, RequiredField::Title, &draft.title)?;
    draft.owner_name = prompt_field(term, RequiredField::OwnerName, &draft.owner_name)?;
    draft.worth = prompt_field(term, RequiredField::Worth, &draft.worth)?;
    draft.meetup_location =
        prompt_field(term, RequiredField::MeetupLocation, &draft.meetup_location)?;
    draft.description = prompt_field(term, RequiredField::Description, &draft.description)?;
    Ok(())
}

/// Prompts for one field; a blank answer keeps the current value so a
/// rejected draft can be corrected without retyping everything.
fn prompt_field(term: &Term, field: RequiredField, current: &str) -> Result<String> {
    if current.trim().is_empty() {
        print::print_status(format!("{}:", field.label()));
    } else {
        print::print_status(format!("{} [{}]:", field.label(), current));
    }

    let typed = term.read_line()?;
    if typed.trim().is_empty() && !current.trim().is_empty() {
        return Ok(current.to_string());
    }
    Ok(typed)
}

async fn prompt_image(term: &Term, draft: &mut ListingDraft) -> Result<()> {
    let prompt = match draft.image() {
        Some(image) => format!("image [{image}] - [p]ick again, [c]amera, enter keeps it:"),
        None => "attach an image? [p]ick from gallery, [c]amera, enter skips:".to_string(),
    };
    print::print_status(prompt);

    let choice = term.read_line()?.trim().to_ascii_lowercase();
    let attached = match choice.as_str() {
        "p" => capture::attach_from(draft, &GalleryPick::new(term.clone())).await?,
        "c" => {
            let spin = spinner::start("waiting for the camera...");
            let result = capture::attach_from(draft, &CameraCapture).await;
            spin.finish_and_clear();
            result?
        }
        _ => return Ok(()),
    };

    if !attached {
        info!("No image selected");
    }
    Ok(())
}

/// Renders the board, honoring the active filter and the expanded row.
///
/// Row numbers are absolute board positions (not filtered indices) so that
/// `t <row>` keeps meaning the same listing whatever the filter says.
fn browse(session: &ListingSession, criteria: &FilterCriteria, cfg: &Config) {
    print::header("exchange board", cfg.quiet);

    if session.is_empty() {
        print::no_results();
        return;
    }

    let predicate = filter::build_predicate(criteria, None);
    let mut shown = 0;

    for (idx, record) in session.rows().enumerate() {
        if !predicate(record) {
            continue;
        }
        if shown > 0 {
            mprint!();
        }
        shown += 1;

        let position = Position::new(idx);
        print::tree_head(idx, record.title());
        let details = if session.is_row_expanded(position) {
            format::expanded_details(record, cfg)
        } else {
            format::collapsed_details(record, cfg)
        };
        print::as_tree_one_level(details);
    }

    if shown == 0 {
        print::no_results();
        return;
    }

    board_summary(shown, session.len(), cfg);
}

fn board_summary(shown: usize, total: usize, cfg: &Config) {
    let shown_str: ColoredString = format!("{shown} shown").bold().green();
    let total_str: ColoredString = format!("{total} listed").bold().yellow();
    let line: String = format!("Board: {shown_str} of {total_str}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&line);
        }
        _ => {
            mprint!();
            swapmeet_common::success!("{line}");
        }
    }
}

fn toggle(row: &str, session: &mut ListingSession, criteria: &FilterCriteria, cfg: &Config) {
    let Ok(index) = row.parse::<usize>() else {
        warn!("usage: t <row number>");
        return;
    };

    if index >= session.len() {
        warn!("no row {index} on the board ({} listed)", session.len());
        return;
    }

    session.toggle_row(Position::new(index));
    browse(session, criteria, cfg);
}

/// Collects new filter criteria; a blank answer leaves a dimension
/// unconstrained.
fn prompt_criteria(term: &Term, cfg: &Config) -> Result<FilterCriteria> {
    print::header("filter options", cfg.quiet);

    let min = prompt_number(term, "minimum worth ($)")?;
    let max = prompt_number(term, "maximum worth ($)")?;
    let worth = if min.is_some() || max.is_some() {
        Some(WorthBound::Between { min, max })
    } else {
        None
    };

    let category = prompt_text(term, "category")?;
    if category.is_some() {
        info!("Category filtering is not wired to listings yet");
    }

    let max_distance_km = prompt_number(term, "maximum distance (km)")?;
    if max_distance_km.is_some() {
        info!("No location collaborator attached; distance stays unconstrained");
    }

    Ok(FilterCriteria {
        worth,
        category,
        max_distance_km,
    })
}

fn prompt_number(term: &Term, label: &str) -> Result<Option<f64>> {
    print::print_status(format!("{label} (enter for none):"));

    let typed = term.read_line()?;
    let trimmed = typed.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warn!("'{trimmed}' is not a number; leaving the dimension unset");
            Ok(None)
        }
    }
}

fn prompt_text(term: &Term, label: &str) -> Result<Option<String>> {
    print::print_status(format!("{label} (enter for none):"));

    let typed = term.read_line()?;
    let trimmed = typed.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}
