use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use swapmeet_common::listing::image::ImageRef;
use swapmeet_core::ports::outbound::image_source::ImageSource;

/// Stand-in for a device camera.
///
/// Produces a fresh opaque handle per capture; the brief delay models the
/// shutter round-trip a real capture collaborator takes.
pub struct CameraCapture;

#[async_trait]
impl ImageSource for CameraCapture {
    async fn acquire(&self) -> anyhow::Result<Option<ImageRef>> {
        tokio::time::sleep(Duration::from_millis(400)).await;

        let token: u32 = rand::rng().random();
        Ok(Some(ImageRef::new(format!("camera://capture-{token:08x}"))))
    }
}
