// SPDX-License-Identifier: MPL-2.0
//! Session state machine.
//!
//! ```text
//! Empty --upload--> Ready --submit--> Processing --ok--> Succeeded
//!                     ^                   |     \--err--> Failed
//!                     '----upload---------'-----------------'
//! any --reset--> Empty
//! ```
//!
//! Every transition consumes the current state and returns the next one, so a
//! variant can only ever hold data that is valid for it.

use super::preview::PreviewRef;
use crate::application::port::text_removal::{RemoteError, RemoteResult};
use crate::domain::image::{EditedImage, SourceImage};
use std::fmt;

/// Tag attached to each submitted request.
///
/// A completion is only applied when its tag matches the request the session
/// is still waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(super) u64);

impl RequestId {
    /// Creates a tag from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The uploaded image together with its drawable preview.
#[derive(Debug, Clone)]
pub struct Original {
    image: SourceImage,
    preview: PreviewRef,
}

impl Original {
    /// Wraps an accepted image and derives its preview.
    #[must_use]
    pub fn new(image: SourceImage) -> Self {
        let preview = PreviewRef::from_encoded(image.bytes());
        Self { image, preview }
    }

    #[must_use]
    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewRef {
        &self.preview
    }
}

/// Coarse view of the state, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Ready,
    Processing,
    Succeeded,
    Failed,
}

/// What happened to a completion handed to [`SessionState::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was stored; the session is now `Succeeded`.
    Succeeded,
    /// The error was stored; the session is now `Failed`.
    Failed,
    /// The session moved on; the completion was dropped.
    Stale,
}

/// The full session state.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Ready {
        original: Original,
    },
    Processing {
        original: Original,
        request: RequestId,
    },
    Succeeded {
        original: Original,
        result: EditedImage,
        result_preview: PreviewRef,
    },
    Failed {
        original: Original,
        error: RemoteError,
    },
}

impl SessionState {
    /// Returns the phase of this state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Empty => Phase::Empty,
            SessionState::Ready { .. } => Phase::Ready,
            SessionState::Processing { .. } => Phase::Processing,
            SessionState::Succeeded { .. } => Phase::Succeeded,
            SessionState::Failed { .. } => Phase::Failed,
        }
    }

    /// Returns the uploaded image, if any.
    #[must_use]
    pub fn original(&self) -> Option<&Original> {
        match self {
            SessionState::Empty => None,
            SessionState::Ready { original }
            | SessionState::Processing { original, .. }
            | SessionState::Succeeded { original, .. }
            | SessionState::Failed { original, .. } => Some(original),
        }
    }

    /// Replaces the original and drops any previous result or error.
    ///
    /// Valid from every state. An in-flight request becomes stale.
    #[must_use]
    pub fn upload(self, original: Original) -> Self {
        SessionState::Ready { original }
    }

    /// Starts a request tagged `request`.
    ///
    /// Returns the image to send, or `None` (state unchanged) when there is
    /// nothing to send or a request is already running.
    #[must_use]
    pub fn submit(self, request: RequestId) -> (Self, Option<SourceImage>) {
        match self {
            SessionState::Ready { original }
            | SessionState::Succeeded { original, .. }
            | SessionState::Failed { original, .. } => {
                let image = original.image().clone();
                (SessionState::Processing { original, request }, Some(image))
            }
            state @ (SessionState::Empty | SessionState::Processing { .. }) => (state, None),
        }
    }

    /// Applies the outcome of request `request`.
    ///
    /// Outcomes for any request other than the one in flight are ignored.
    #[must_use]
    pub fn complete(
        self,
        request: RequestId,
        outcome: RemoteResult<EditedImage>,
    ) -> (Self, Completion) {
        match self {
            SessionState::Processing {
                original,
                request: pending,
            } if pending == request => match outcome {
                Ok(result) => {
                    let result_preview = PreviewRef::from_encoded(result.bytes());
                    (
                        SessionState::Succeeded {
                            original,
                            result,
                            result_preview,
                        },
                        Completion::Succeeded,
                    )
                }
                Err(err) => (
                    SessionState::Failed {
                        original,
                        error: err,
                    },
                    Completion::Failed,
                ),
            },
            state => (state, Completion::Stale),
        }
    }

    /// Drops everything and returns to `Empty`.
    #[must_use]
    pub fn reset(self) -> Self {
        SessionState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::ImageMime;

    fn original(name: &str) -> Original {
        Original::new(SourceImage::new(
            name,
            ImageMime::new("image/png"),
            vec![0x89, b'P', b'N', b'G'],
        ))
    }

    fn edited() -> EditedImage {
        EditedImage::new(ImageMime::new("image/png"), vec![1, 2, 3])
    }

    #[test]
    fn default_is_empty() {
        let state = SessionState::default();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.original().is_none());
    }

    #[test]
    fn upload_from_any_state_goes_to_ready() {
        let ready = SessionState::Empty.upload(original("a.png"));
        assert_eq!(ready.phase(), Phase::Ready);

        let (processing, _) = ready.submit(RequestId::new(1));
        let replaced = processing.upload(original("b.png"));
        assert_eq!(replaced.phase(), Phase::Ready);
        assert_eq!(
            replaced.original().map(|o| o.image().file_name()),
            Some("b.png")
        );
    }

    #[test]
    fn submit_from_empty_is_noop() {
        let (state, image) = SessionState::Empty.submit(RequestId::new(1));
        assert_eq!(state.phase(), Phase::Empty);
        assert!(image.is_none());
    }

    #[test]
    fn submit_while_processing_is_noop() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(1));
        let (state, image) = state.submit(RequestId::new(2));

        assert!(image.is_none());
        match state {
            SessionState::Processing { request, .. } => assert_eq!(request, RequestId::new(1)),
            other => panic!("expected Processing, got {other:?}"),
        }
    }

    #[test]
    fn matching_success_stores_result() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(7));
        let (state, completion) = state.complete(RequestId::new(7), Ok(edited()));

        assert_eq!(completion, Completion::Succeeded);
        match state {
            SessionState::Succeeded { result, .. } => {
                assert_eq!(result.mime().as_str(), "image/png");
            }
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn matching_failure_stores_message() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(1));
        let (state, completion) = state.complete(
            RequestId::new(1),
            Err(RemoteError::Network(String::new())),
        );

        assert_eq!(completion, Completion::Failed);
        match state {
            SessionState::Failed { error, .. } => {
                assert_eq!(error.i18n_key(), "remote-error-generic");
                assert!(!error.user_message().is_empty());
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_completion_is_stale() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(2));
        let (state, completion) = state.complete(RequestId::new(1), Ok(edited()));

        assert_eq!(completion, Completion::Stale);
        assert_eq!(state.phase(), Phase::Processing);
    }

    #[test]
    fn completion_outside_processing_is_stale() {
        let state = SessionState::Empty.upload(original("a.png"));
        let (state, completion) = state.complete(RequestId::new(1), Ok(edited()));
        assert_eq!(completion, Completion::Stale);
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn resubmit_after_failure_clears_error() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(1));
        let (state, _) = state.complete(RequestId::new(1), Err(RemoteError::Refused("no".into())));
        let (state, image) = state.submit(RequestId::new(2));

        assert!(image.is_some());
        assert_eq!(state.phase(), Phase::Processing);
    }

    #[test]
    fn upload_after_outcome_drops_result_and_error() {
        let (succeeded, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(1));
        let (succeeded, _) = succeeded.complete(RequestId::new(1), Ok(edited()));
        assert_eq!(succeeded.phase(), Phase::Succeeded);
        assert!(matches!(
            succeeded.upload(original("b.png")),
            SessionState::Ready { .. }
        ));

        let (failed, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(2));
        let (failed, _) = failed.complete(RequestId::new(2), Err(RemoteError::Timeout));
        assert_eq!(failed.phase(), Phase::Failed);
        assert!(matches!(
            failed.upload(original("b.png")),
            SessionState::Ready { .. }
        ));
    }

    #[test]
    fn reset_returns_to_empty() {
        let (state, _) = SessionState::Empty
            .upload(original("a.png"))
            .submit(RequestId::new(1));
        let (state, _) = state.complete(RequestId::new(1), Ok(edited()));

        let state = state.reset();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.original().is_none());
    }
}
