// SPDX-License-Identifier: MPL-2.0
//! File I/O for images: reading user files into the session and writing the
//! edited result back out.

pub mod download;
pub mod intake;

pub use intake::{is_supported_extension, SUPPORTED_EXTENSIONS};
