// SPDX-License-Identifier: MPL-2.0
//! Turns a user-provided file into a [`SourceImage`].
//!
//! The open dialog and the drop handler only let through paths with a
//! supported extension. The contents are then sniffed: the MIME type comes
//! from the magic bytes, not from the file name, and the header must decode.

use crate::domain::image::{ImageMime, SourceImage};
use crate::error::IntakeError;
use image_rs::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Extensions accepted by the open dialog and the drop target.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

/// Returns `true` if `path` has one of the [`SUPPORTED_EXTENSIONS`]
/// (case-insensitive).
#[must_use]
pub fn is_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Identifies the image format of `bytes`.
///
/// # Errors
///
/// Returns [`IntakeError::Empty`] for an empty buffer and
/// [`IntakeError::NotAnImage`] when the format is unknown, unsupported, or
/// its header cannot be decoded.
pub fn sniff(bytes: &[u8]) -> Result<ImageMime, IntakeError> {
    if bytes.is_empty() {
        return Err(IntakeError::Empty);
    }

    let format = image_rs::guess_format(bytes).map_err(|_| IntakeError::NotAnImage)?;
    let mime = match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        _ => return Err(IntakeError::NotAnImage),
    };

    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|_| IntakeError::NotAnImage)?;
    tracing::debug!(mime, width, height, "sniffed image");

    Ok(ImageMime::new(mime))
}

/// Builds a [`SourceImage`] from already-read file contents.
///
/// # Errors
///
/// See [`sniff`].
pub fn accept(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<SourceImage, IntakeError> {
    let mime = sniff(&bytes)?;
    Ok(SourceImage::new(file_name, mime, bytes))
}

/// Reads `path` on the async runtime and accepts it.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] if the file cannot be read, otherwise see
/// [`sniff`].
pub async fn load(path: impl AsRef<Path>) -> Result<SourceImage, IntakeError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| IntakeError::Io(e.to_string()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let image = accept(file_name, bytes)?;
    tracing::info!(
        path = %path.display(),
        mime = %image.mime(),
        bytes = image.bytes().len(),
        "image loaded"
    );
    Ok(image)
}
