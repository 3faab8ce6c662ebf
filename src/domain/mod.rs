// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no UI or network dependencies.
//!
//! # Modules
//!
//! - [`image`]: Encoded image payloads ([`SourceImage`](image::SourceImage),
//!   [`EditedImage`](image::EditedImage)) and their MIME type ([`ImageMime`](image::ImageMime))

pub mod image;
