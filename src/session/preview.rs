// SPDX-License-Identifier: MPL-2.0
//! Drawable handles for encoded images.

use iced::widget::image::Handle;

/// A handle the image widget can draw, decoded lazily by the renderer.
///
/// Dropping the last clone releases the renderer's cached texture.
#[derive(Debug, Clone)]
pub struct PreviewRef {
    handle: Handle,
}

impl PreviewRef {
    /// Creates a preview from encoded image bytes (PNG, JPEG, ...).
    #[must_use]
    pub fn from_encoded(bytes: &[u8]) -> Self {
        Self {
            handle: Handle::from_bytes(bytes.to_vec()),
        }
    }

    /// Returns the underlying widget handle.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}
