// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary from
//! `assets/i18n/`. The active locale is chosen once at startup, in order:
//! `--lang`, the `[general] language` setting, the OS locale, then `en-US`.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
