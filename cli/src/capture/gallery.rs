use async_trait::async_trait;
use console::Term;
use swapmeet_common::listing::image::ImageRef;
use swapmeet_core::ports::outbound::image_source::ImageSource;

use crate::terminal::print;

/// Gallery pick backed by the terminal: the user supplies the path or URI of
/// an existing asset. An empty answer is no selection, not an error.
pub struct GalleryPick {
    term: Term,
}

impl GalleryPick {
    pub fn new(term: Term) -> Self {
        Self { term }
    }
}

#[async_trait]
impl ImageSource for GalleryPick {
    async fn acquire(&self) -> anyhow::Result<Option<ImageRef>> {
        print::print_status("path or URI of the image (enter cancels):");
        let typed = self.term.read_line()?;
        let trimmed = typed.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(ImageRef::new(trimmed)))
    }
}
