// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Remote Service Defaults
// ==========================================================================

/// Base URL of the Gemini REST API (without trailing slash).
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image-capable Gemini model used for text removal.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Environment variable consulted for the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Instruction sent alongside the image.
pub const DEFAULT_PROMPT: &str = "Remove all visible text, captions, watermarks and lettering from this image. \
Fill the areas where text was removed so they blend seamlessly with the surrounding background. \
Do not change anything else in the image and return only the edited image.";

/// Overall request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Minimum accepted request timeout (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 5;

/// Maximum accepted request timeout (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Connection establishment timeout (seconds). Not configurable.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// UI Defaults
// ==========================================================================

/// Interval between notification auto-dismiss checks (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 250;

const _: () = {
    assert!(MIN_TIMEOUT_SECS < MAX_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(CONNECT_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
};
