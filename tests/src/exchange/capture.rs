#![cfg(test)]
use async_trait::async_trait;
use swapmeet_common::listing::draft::ListingDraft;
use swapmeet_common::listing::image::ImageRef;
use swapmeet_core::capture;
use swapmeet_core::ports::outbound::image_source::ImageSource;

/// Collaborator stub that resolves a fixed result.
struct FixedSource(Option<&'static str>);

#[async_trait]
impl ImageSource for FixedSource {
    async fn acquire(&self) -> anyhow::Result<Option<ImageRef>> {
        Ok(self.0.map(ImageRef::new))
    }
}

struct FailingSource;

#[async_trait]
impl ImageSource for FailingSource {
    async fn acquire(&self) -> anyhow::Result<Option<ImageRef>> {
        Err(anyhow::anyhow!("capture device unavailable"))
    }
}

#[tokio::test]
async fn attaches_a_resolved_capture() {
    let mut draft = ListingDraft::new();

    let attached = capture::attach_from(&mut draft, &FixedSource(Some("file:///a.jpg")))
        .await
        .unwrap();

    assert!(attached);
    assert_eq!(draft.image().unwrap().as_str(), "file:///a.jpg");
}

#[tokio::test]
async fn no_selection_is_a_quiet_noop() {
    let mut draft = ListingDraft::new();
    draft.attach_image(ImageRef::new("file:///keep.jpg"));

    let attached = capture::attach_from(&mut draft, &FixedSource(None))
        .await
        .unwrap();

    assert!(!attached);
    // A dismissed picker never clobbers an earlier attachment.
    assert_eq!(draft.image().unwrap().as_str(), "file:///keep.jpg");
}

#[tokio::test]
async fn later_capture_wins() {
    let mut draft = ListingDraft::new();

    capture::attach_from(&mut draft, &FixedSource(Some("file:///a.jpg")))
        .await
        .unwrap();
    capture::attach_from(&mut draft, &FixedSource(Some("camera://capture-1")))
        .await
        .unwrap();

    assert_eq!(draft.image().unwrap().as_str(), "camera://capture-1");
}

#[tokio::test]
async fn collaborator_failure_surfaces_without_attaching() {
    let mut draft = ListingDraft::new();

    let result = capture::attach_from(&mut draft, &FailingSource).await;

    assert!(result.is_err());
    assert!(draft.image().is_none());
}
