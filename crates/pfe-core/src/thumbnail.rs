//! Optional thumbnail rendering.
//!
//! The catalog works without any provider; cards fall back to an icon.

/// Result of a thumbnail request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    /// Encoded image bytes with their MIME type.
    Image { mime: String, bytes: Vec<u8> },
    Unavailable,
}

/// Renders a preview image for a document reference.
pub trait ThumbnailProvider {
    fn render(&self, url: &str) -> Thumbnail;
}

/// Provider used when no rasterizer is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoThumbnails;

impl ThumbnailProvider for NoThumbnails {
    fn render(&self, _url: &str) -> Thumbnail {
        Thumbnail::Unavailable
    }
}
