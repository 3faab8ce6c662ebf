// SPDX-License-Identifier: MPL-2.0
//! Encoded image payloads exchanged between intake, the remote service and
//! the download action.
//!
//! Bytes are shared through `Arc` so a session original can be handed to an
//! in-flight request without copying the file contents.

mod mime;

pub use mime::{ImageMime, DOWNLOAD_STEM, FALLBACK_EXTENSION};

use std::sync::Arc;

/// An image file accepted by the intake, still in its encoded form.
#[derive(Debug, Clone)]
pub struct SourceImage {
    file_name: String,
    mime: ImageMime,
    bytes: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Creates a new source image.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime: ImageMime, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime,
            bytes: Arc::new(bytes),
        }
    }

    /// Returns the file name the image was loaded from (without directory).
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the detected MIME type.
    #[must_use]
    pub fn mime(&self) -> &ImageMime {
        &self.mime
    }

    /// Returns the encoded file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// An image returned by the remote text-removal service.
#[derive(Debug, Clone)]
pub struct EditedImage {
    mime: ImageMime,
    bytes: Arc<Vec<u8>>,
}

impl EditedImage {
    /// Creates a new edited image from decoded bytes.
    #[must_use]
    pub fn new(mime: ImageMime, bytes: Vec<u8>) -> Self {
        Self {
            mime,
            bytes: Arc::new(bytes),
        }
    }

    /// Returns the MIME type declared by the service.
    #[must_use]
    pub fn mime(&self) -> &ImageMime {
        &self.mime
    }

    /// Returns the decoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the file name to use when saving this image.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        self.mime.download_file_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_image_clone_shares_bytes() {
        let image = SourceImage::new("photo.png", ImageMime::new("image/png"), vec![1, 2, 3]);
        let clone = image.clone();
        assert!(std::ptr::eq(image.bytes().as_ptr(), clone.bytes().as_ptr()));
        assert_eq!(clone.file_name(), "photo.png");
    }

    #[test]
    fn edited_image_download_name_uses_mime() {
        let edited = EditedImage::new(ImageMime::new("image/webp"), vec![0]);
        assert_eq!(edited.download_file_name(), "edited-image.webp");
    }
}
