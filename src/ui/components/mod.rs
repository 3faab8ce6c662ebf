// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_banner`] - Inline banner showing the last failure
//! - [`spinner`] - Rotating arc shown while a request is in flight

pub mod error_banner;
pub mod spinner;

pub use error_banner::ErrorBanner;
pub use spinner::Spinner;
