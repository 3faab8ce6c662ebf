// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate the session and notifications synchronously and return the
//! [`Task`] for any side effect (dialogs, file reads, the remote call, saving).

use super::persisted_state::PersistedState;
use super::Message;
use crate::application::port::{RemoteResult, TextRemover};
use crate::domain::image::{EditedImage, SourceImage};
use crate::error::{Error, IntakeError};
use crate::media::{download, intake, SUPPORTED_EXTENSIONS};
use crate::session::{Completion, RequestId, Session};
use crate::ui::components::Spinner;
use crate::ui::notifications::{self, Notification};
use crate::ui::workspace;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the handlers may touch.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub remover: &'a Arc<dyn TextRemover>,
    pub notifications: &'a mut notifications::Manager,
    pub persisted: &'a mut PersistedState,
    /// Where `state.cbor` is written; `None` resolves the data directory.
    pub state_dir: Option<PathBuf>,
    pub spinner_rotation: &'a mut f32,
}

/// Routes a workspace intent to its handler.
pub fn handle_workspace_message(
    ctx: &mut UpdateContext<'_>,
    message: workspace::Message,
) -> Task<Message> {
    match message {
        workspace::Message::OpenFile => {
            handle_open_file_dialog(ctx.persisted.last_open_directory.clone())
        }
        workspace::Message::RemoveText => handle_remove_text(ctx),
        workspace::Message::Download => handle_download(ctx),
        workspace::Message::StartOver => handle_start_over(ctx),
    }
}

// =============================================================================
// Intake
// =============================================================================

/// Opens the native file picker filtered to supported image extensions.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_image_from_path(path)
}

/// Handles a file dropped on the window. Files with unsupported extensions
/// are ignored.
pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    if !intake::is_supported_extension(&path) {
        tracing::debug!(path = %path.display(), "ignoring dropped file with unsupported extension");
        return Task::none();
    }
    load_image_from_path(path)
}

/// Reads and sniffs `path` on the runtime.
pub fn load_image_from_path(path: PathBuf) -> Task<Message> {
    Task::perform(
        {
            let path = path.clone();
            async move { intake::load(path).await }
        },
        move |result| Message::ImageLoaded {
            path: path.clone(),
            result,
        },
    )
}

/// Makes a loaded image the session original, or reports why it could not.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<SourceImage, IntakeError>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.session.upload(image);
            *ctx.spinner_rotation = 0.0;
            ctx.notifications.clear_intake_warnings();

            ctx.persisted.remember_open_file(&path);
            persist(ctx);
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "image rejected");
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let mut notification = Notification::warning(err.i18n_key()).with_arg("file", file);
            if let IntakeError::Io(reason) = &err {
                notification = notification.with_arg("error", reason.clone());
            }
            ctx.notifications.push(notification);
        }
    }
    Task::none()
}

// =============================================================================
// Remote request
// =============================================================================

/// Starts a request unless there is nothing to send or one is running.
pub fn handle_remove_text(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(pending) = ctx.session.submit() else {
        tracing::debug!(phase = ?ctx.session.phase(), "submit ignored");
        return Task::none();
    };

    let id = pending.id;
    tracing::info!(
        request = %id,
        remover = %ctx.remover.describe(),
        file = pending.image.file_name(),
        "submitting request"
    );
    *ctx.spinner_rotation = 0.0;

    Task::perform(ctx.remover.remove_text(pending.image), move |result| {
        Message::RemoveTextCompleted { id, result }
    })
}

/// Applies the outcome of request `id`; stale outcomes are dropped.
pub fn handle_remove_text_completed(
    ctx: &mut UpdateContext<'_>,
    id: RequestId,
    result: RemoteResult<EditedImage>,
) -> Task<Message> {
    match ctx.session.complete(id, result) {
        Completion::Succeeded => {
            tracing::info!(request = %id, "text removal succeeded");
        }
        Completion::Failed => {
            if let Some(error) = ctx.session.error() {
                tracing::warn!(request = %id, error = %error, "text removal failed");
            }
        }
        Completion::Stale => {
            tracing::debug!(request = %id, "discarding stale response");
        }
    }
    Task::none()
}

// =============================================================================
// Download
// =============================================================================

/// Opens the save dialog for the current result.
pub fn handle_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(result) = ctx.session.result() else {
        return Task::none();
    };

    let file_name = result.download_file_name();
    let (filter_name, filter_ext) = download::save_filter(result);
    let last_save_directory = ctx.persisted.last_save_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter(filter_name, &filter_ext);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::DownloadDialogResult,
    )
}

/// Writes the result to the chosen path.
pub fn handle_download_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(result) = ctx.session.result() else {
        // Session moved on while the dialog was open
        tracing::debug!(path = %path.display(), "no result left to save");
        return Task::none();
    };

    Task::perform(
        download::save(result.clone(), path),
        Message::DownloadCompleted,
    )
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            ctx.persisted.remember_save_file(&path);
            persist(ctx);
            ctx.notifications.push(
                Notification::success("notification-download-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "saving edited image failed");
            ctx.notifications.push(
                Notification::error("notification-download-error")
                    .with_arg("error", err.to_string()),
            );
        }
    }
    Task::none()
}

// =============================================================================
// Misc
// =============================================================================

pub fn handle_start_over(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.session.reset();
    *ctx.spinner_rotation = 0.0;
    Task::none()
}

/// Expires toasts and advances the loading indicator.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    if ctx.session.is_processing() {
        *ctx.spinner_rotation = Spinner::advance(*ctx.spinner_rotation);
    }
    Task::none()
}

fn persist(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.persisted.save_to(ctx.state_dir.clone()) {
        ctx.notifications.push(Notification::warning(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{RemoteError, UnavailableRemover};
    use crate::domain::image::ImageMime;
    use crate::session::Phase;
    use tempfile::tempdir;

    struct Harness {
        session: Session,
        remover: Arc<dyn TextRemover>,
        notifications: notifications::Manager,
        persisted: PersistedState,
        state_dir: PathBuf,
        spinner_rotation: f32,
        _dir: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempdir().expect("temp dir");
            Self {
                session: Session::new(),
                remover: Arc::new(UnavailableRemover::new(RemoteError::MissingApiKey {
                    var: "GEMINI_API_KEY".into(),
                })),
                notifications: notifications::Manager::new(),
                persisted: PersistedState::default(),
                state_dir: dir.path().to_path_buf(),
                spinner_rotation: 0.0,
                _dir: dir,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                session: &mut self.session,
                remover: &self.remover,
                notifications: &mut self.notifications,
                persisted: &mut self.persisted,
                state_dir: Some(self.state_dir.clone()),
                spinner_rotation: &mut self.spinner_rotation,
            }
        }
    }

    fn png(name: &str) -> SourceImage {
        SourceImage::new(name, ImageMime::new("image/png"), vec![1, 2, 3])
    }

    #[test]
    fn loaded_image_becomes_original_and_remembers_directory() {
        let mut h = Harness::new();
        let _ = handle_image_loaded(
            &mut h.ctx(),
            PathBuf::from("/photos/photo.png"),
            Ok(png("photo.png")),
        );

        assert_eq!(h.session.phase(), Phase::Ready);
        assert_eq!(
            h.persisted.last_open_directory,
            Some(PathBuf::from("/photos"))
        );
        assert!(h.state_dir.join("state.cbor").exists());
        assert!(!h.notifications.has_notifications());
    }

    #[test]
    fn rejected_image_warns_and_keeps_session() {
        let mut h = Harness::new();
        let _ = handle_image_loaded(&mut h.ctx(), PathBuf::from("/a/first.png"), Ok(png("first.png")));

        let _ = handle_image_loaded(
            &mut h.ctx(),
            PathBuf::from("/a/notes.png"),
            Err(IntakeError::NotAnImage),
        );

        assert_eq!(h.session.phase(), Phase::Ready);
        let original = h.session.original().expect("original kept");
        assert_eq!(original.image().file_name(), "first.png");

        let toast = h.notifications.visible().next().expect("warning toast");
        assert_eq!(toast.message_key(), "notification-intake-not-image");
        assert!(toast
            .message_args()
            .iter()
            .any(|(k, v)| k == "file" && v == "notes.png"));
    }

    #[test]
    fn successful_load_clears_intake_warnings() {
        let mut h = Harness::new();
        let _ = handle_image_loaded(&mut h.ctx(), PathBuf::from("/a/x.png"), Err(IntakeError::Empty));
        assert!(h.notifications.has_notifications());

        let _ = handle_image_loaded(&mut h.ctx(), PathBuf::from("/a/y.png"), Ok(png("y.png")));
        assert!(!h.notifications.has_notifications());
    }

    #[test]
    fn submit_moves_to_processing_once() {
        let mut h = Harness::new();
        let _ = handle_remove_text(&mut h.ctx());
        assert_eq!(h.session.phase(), Phase::Empty);

        h.session.upload(png("a.png"));
        let _ = handle_remove_text(&mut h.ctx());
        assert_eq!(h.session.phase(), Phase::Processing);
        let first = h.session.pending_request().expect("in flight");

        let _ = handle_remove_text(&mut h.ctx());
        assert_eq!(h.session.pending_request(), Some(first));
    }

    #[test]
    fn completion_fills_session_and_stale_is_ignored() {
        let mut h = Harness::new();
        h.session.upload(png("a.png"));
        let _ = handle_remove_text(&mut h.ctx());
        let id = h.session.pending_request().expect("in flight");

        let _ = handle_start_over(&mut h.ctx());
        let _ = handle_remove_text_completed(
            &mut h.ctx(),
            id,
            Ok(EditedImage::new(ImageMime::new("image/png"), vec![9])),
        );
        assert_eq!(h.session.phase(), Phase::Empty);

        h.session.upload(png("b.png"));
        let _ = handle_remove_text(&mut h.ctx());
        let id = h.session.pending_request().expect("in flight");
        let _ = handle_remove_text_completed(
            &mut h.ctx(),
            id,
            Err(RemoteError::Network("service unavailable".into())),
        );
        assert_eq!(h.session.phase(), Phase::Failed);
        assert_eq!(
            h.session.error(),
            Some(&RemoteError::Network("service unavailable".into()))
        );
    }

    #[test]
    fn tick_advances_spinner_only_while_processing() {
        let mut h = Harness::new();
        let _ = handle_tick(&mut h.ctx());
        assert_eq!(h.spinner_rotation, 0.0);

        h.session.upload(png("a.png"));
        let _ = handle_remove_text(&mut h.ctx());
        let _ = handle_tick(&mut h.ctx());
        assert!(h.spinner_rotation > 0.0);
    }

    #[test]
    fn download_completion_reports_outcome() {
        let mut h = Harness::new();
        let _ = handle_download_completed(
            &mut h.ctx(),
            Ok(PathBuf::from("/exports/edited-image.png")),
        );
        assert_eq!(
            h.persisted.last_save_directory,
            Some(PathBuf::from("/exports"))
        );
        let toast = h.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-download-success");

        let _ = handle_download_completed(&mut h.ctx(), Err(Error::Io("disk full".into())));
        assert!(h
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-download-error"));
    }
}
