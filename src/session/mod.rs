// SPDX-License-Identifier: MPL-2.0
//! The editing session: one original image, at most one request in flight,
//! and the outcome of the latest request.
//!
//! [`Session`] owns a [`SessionState`] and hands out request tags. The app
//! layer calls [`Session::submit`] and runs the returned [`PendingRequest`] on
//! the async runtime; the completion is fed back through
//! [`Session::complete`] with the same tag.

mod preview;
mod state;

pub use preview::PreviewRef;
pub use state::{Completion, Original, Phase, RequestId, SessionState};

use crate::application::port::text_removal::{RemoteError, RemoteResult};
use crate::domain::image::{EditedImage, SourceImage};

/// A request the caller must now send to the remote service.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub id: RequestId,
    pub image: SourceImage,
}

/// Mutable wrapper around [`SessionState`].
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    last_request: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the original image. Any result, error or in-flight request
    /// is forgotten.
    pub fn upload(&mut self, image: SourceImage) {
        let original = Original::new(image);
        self.state = std::mem::take(&mut self.state).upload(original);
    }

    /// Starts a request for the current original.
    ///
    /// Returns `None` when there is no original or a request is already
    /// running.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        let id = RequestId::new(self.last_request + 1);
        let (state, image) = std::mem::take(&mut self.state).submit(id);
        self.state = state;

        let image = image?;
        self.last_request = id.0;
        Some(PendingRequest { id, image })
    }

    /// Feeds back the outcome of request `id`.
    pub fn complete(&mut self, id: RequestId, outcome: RemoteResult<EditedImage>) -> Completion {
        let (state, completion) = std::mem::take(&mut self.state).complete(id, outcome);
        self.state = state;
        completion
    }

    /// Returns to the empty state.
    pub fn reset(&mut self) {
        self.state = std::mem::take(&mut self.state).reset();
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn original(&self) -> Option<&Original> {
        self.state.original()
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self.state, SessionState::Processing { .. })
    }

    /// Returns the edited image while `Succeeded`.
    #[must_use]
    pub fn result(&self) -> Option<&EditedImage> {
        match &self.state {
            SessionState::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Returns the preview of the edited image while `Succeeded`.
    #[must_use]
    pub fn result_preview(&self) -> Option<&PreviewRef> {
        match &self.state {
            SessionState::Succeeded { result_preview, .. } => Some(result_preview),
            _ => None,
        }
    }

    /// Returns the failure of the latest request while `Failed`.
    #[must_use]
    pub fn error(&self) -> Option<&RemoteError> {
        match &self.state {
            SessionState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the request currently awaited, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        match &self.state {
            SessionState::Processing { request, .. } => Some(*request),
            _ => None,
        }
    }
}
