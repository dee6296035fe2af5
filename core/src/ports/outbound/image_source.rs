use async_trait::async_trait;
use swapmeet_common::listing::image::ImageRef;

/// A capture collaborator that can resolve an image asset.
///
/// Gallery pick and camera capture both implement this; the core never
/// learns which one produced a handle, and both produce the same shape.
/// Acquisition runs on the collaborator's side; the core only consumes the
/// completed result.
#[async_trait]
pub trait ImageSource {
    /// Resolves one captured image, or `None` when the user made no
    /// selection. No selection is a no-op for the caller, not an error.
    async fn acquire(&self) -> anyhow::Result<Option<ImageRef>>;
}
