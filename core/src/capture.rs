//! # Image Attachment
//!
//! Landing contract between the capture collaborators and a draft. The core
//! does not distinguish gallery picks from camera captures; whichever source
//! resolves, the handle lands in the draft's single image slot.

use swapmeet_common::listing::draft::ListingDraft;
use tracing::debug;

use crate::ports::outbound::image_source::ImageSource;

/// Awaits a completed capture result and attaches it to the draft.
///
/// Returns whether an image was attached. `None` from the collaborator (the
/// user made no selection) is a quiet no-op, not an error; a previously
/// attached image survives it.
pub async fn attach_from(
    draft: &mut ListingDraft,
    source: &dyn ImageSource,
) -> anyhow::Result<bool> {
    match source.acquire().await? {
        Some(image) => {
            debug!("attaching captured image {image}");
            draft.attach_image(image);
            Ok(true)
        }
        None => Ok(false),
    }
}
