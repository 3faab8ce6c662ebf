// SPDX-License-Identifier: MPL-2.0
//! Image MIME type value object.

use std::fmt;

/// Extension used when a MIME type carries no usable subtype.
pub const FALLBACK_EXTENSION: &str = "png";

/// Base name of files produced by the download action.
pub const DOWNLOAD_STEM: &str = "edited-image";

/// An image MIME type such as `image/png`.
///
/// The value is stored as received (trimmed) so that it can be echoed back to
/// the remote service verbatim. Derived information like the file extension
/// is computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageMime(String);

impl ImageMime {
    /// Creates a MIME type from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// Returns the MIME type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the top-level type is `image`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.0
            .split('/')
            .next()
            .is_some_and(|top| top.eq_ignore_ascii_case("image"))
    }

    /// Returns the file extension derived from the subtype.
    ///
    /// `image/png` gives `png`, `image/jpeg` gives `jpeg` and
    /// `image/svg+xml` gives `svg`. Parameters (`;charset=...`) are ignored.
    /// Falls back to [`FALLBACK_EXTENSION`] when no subtype is present.
    #[must_use]
    pub fn extension(&self) -> String {
        let subtype = self
            .0
            .split(';')
            .next()
            .and_then(|essence| essence.split_once('/'))
            .map(|(_, subtype)| subtype)
            .and_then(|subtype| subtype.split('+').next())
            .map(str::trim)
            .unwrap_or_default();

        let valid = subtype
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');

        if valid {
            subtype.to_ascii_lowercase()
        } else {
            FALLBACK_EXTENSION.to_string()
        }
    }

    /// Returns the download file name for an image of this type,
    /// e.g. `edited-image.png`.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        format!("{DOWNLOAD_STEM}.{}", self.extension())
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
