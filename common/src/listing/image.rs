use std::fmt;

/// Opaque handle to an externally captured image asset.
///
/// Both capture collaborators (gallery pick and camera) resolve to this same
/// shape; nothing in the workspace inspects the handle's contents, size or
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
