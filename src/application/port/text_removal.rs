// SPDX-License-Identifier: MPL-2.0
//! Text removal port definition.
//!
//! This module defines the [`TextRemover`] trait for the remote operation that
//! erases visible text from an image.
//!
//! # Design Notes
//!
//! - One invocation performs exactly one attempt; retries are a caller decision
//! - The returned future is `'static + Send` so it can be handed directly to
//!   `iced::Task::perform`
//! - Errors carry an i18n key and arguments for the error banner; any text
//!   supplied by the service is passed through as an argument unchanged

use crate::domain::image::{EditedImage, SourceImage};
use futures_util::future::BoxFuture;
use std::fmt;

/// Message shown when a failure carries no human-readable text.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

// =============================================================================
// RemoteError
// =============================================================================

/// Errors that can occur while asking the remote service to remove text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// No API key is available in the configured environment variable.
    MissingApiKey {
        /// Name of the environment variable that was consulted.
        var: String,
    },

    /// The HTTP client could not be built.
    Client(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The request did not complete (connection, DNS, TLS).
    Network(String),

    /// The service answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Message extracted from the service's error envelope, if any.
        message: String,
    },

    /// The response could not be understood.
    MalformedResponse(String),

    /// The service declined to produce an image (safety block, text-only reply).
    Refused(String),
}

impl RemoteError {
    /// Returns the i18n message key for this error type.
    ///
    /// Errors whose only content is an empty detail map to the generic
    /// failure message.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        if self.has_empty_detail() {
            return "remote-error-generic";
        }
        match self {
            RemoteError::MissingApiKey { .. } => "remote-error-missing-api-key",
            RemoteError::Client(_) => "remote-error-client",
            RemoteError::Timeout => "remote-error-timeout",
            RemoteError::Network(_) => "remote-error-network",
            RemoteError::Status { message, .. } if message.trim().is_empty() => {
                "remote-error-status-code"
            }
            RemoteError::Status { .. } => "remote-error-status",
            RemoteError::MalformedResponse(_) => "remote-error-malformed",
            RemoteError::Refused(_) => "remote-error-refused",
        }
    }

    /// Returns the arguments for the message named by [`Self::i18n_key`].
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            RemoteError::MissingApiKey { var } => vec![("var", var.clone())],
            RemoteError::Status { code, message } => vec![
                ("code", code.to_string()),
                ("message", message.trim().to_string()),
            ],
            other => other
                .detail()
                .map(str::trim)
                .filter(|detail| !detail.is_empty())
                .map(|detail| vec![("detail", detail.to_string())])
                .unwrap_or_default(),
        }
    }

    /// Returns the English message, used when no translation is available.
    ///
    /// Falls back to [`GENERIC_FAILURE_MESSAGE`] when the error carries no
    /// readable text.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.has_empty_detail() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            RemoteError::Client(detail)
            | RemoteError::Network(detail)
            | RemoteError::MalformedResponse(detail)
            | RemoteError::Refused(detail) => Some(detail),
            RemoteError::MissingApiKey { .. }
            | RemoteError::Timeout
            | RemoteError::Status { .. } => None,
        }
    }

    fn has_empty_detail(&self) -> bool {
        self.detail().is_some_and(|detail| detail.trim().is_empty())
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::MissingApiKey { var } => {
                write!(f, "API key not found: set the {var} environment variable")
            }
            RemoteError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            RemoteError::Timeout => write!(f, "The request to the service timed out"),
            RemoteError::Network(msg) => write!(f, "Could not reach the service: {msg}"),
            RemoteError::Status { code, message } if message.trim().is_empty() => {
                write!(f, "Service returned HTTP {code}")
            }
            RemoteError::Status { code, message } => {
                write!(f, "Service returned HTTP {code}: {message}")
            }
            RemoteError::MalformedResponse(msg) => {
                write!(f, "Unexpected response from service: {msg}")
            }
            RemoteError::Refused(msg) => {
                write!(f, "The service declined to produce an image: {msg}")
            }
        }
    }
}

impl std::error::Error for RemoteError {}

/// Result type for text removal operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

// =============================================================================
// TextRemover Trait
// =============================================================================

/// Port for the remote text-removal operation.
///
/// Infrastructure adapters implement this trait against a concrete provider.
/// Tests implement it with in-memory fakes.
///
/// # Example
///
/// ```ignore
/// use text_eraser::application::port::TextRemover;
///
/// async fn erase(remover: &dyn TextRemover, image: SourceImage) {
///     match remover.remove_text(image).await {
///         Ok(edited) => println!("got {}", edited.mime()),
///         Err(err) => eprintln!("{}", err.user_message()),
///     }
/// }
/// ```
pub trait TextRemover: Send + Sync {
    /// Sends `image` to the service and resolves to the edited image.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] on network failure, unexpected response
    /// shape, or when the service declines to produce an image. No partial
    /// result is ever returned.
    fn remove_text(&self, image: SourceImage) -> BoxFuture<'static, RemoteResult<EditedImage>>;

    /// Short provider description used in logs.
    fn describe(&self) -> String;
}

// =============================================================================
// UnavailableRemover
// =============================================================================

/// Stand-in used when the real client cannot be constructed.
///
/// Every call fails with the construction error so the problem is surfaced
/// through the regular failure path instead of preventing startup.
#[derive(Debug, Clone)]
pub struct UnavailableRemover {
    reason: RemoteError,
}

impl UnavailableRemover {
    /// Creates a remover that always fails with `reason`.
    #[must_use]
    pub fn new(reason: RemoteError) -> Self {
        Self { reason }
    }
}

impl TextRemover for UnavailableRemover {
    fn remove_text(&self, _image: SourceImage) -> BoxFuture<'static, RemoteResult<EditedImage>> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(reason) })
    }

    fn describe(&self) -> String {
        format!("unavailable ({})", self.reason)
    }
}
