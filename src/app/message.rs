// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::RemoteResult;
use crate::domain::image::{EditedImage, SourceImage};
use crate::error::{Error, IntakeError};
use crate::session::RequestId;
use crate::ui::notifications;
use crate::ui::workspace;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Workspace(workspace::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A file finished reading and sniffing.
    ImageLoaded {
        path: PathBuf,
        result: Result<SourceImage, IntakeError>,
    },
    /// The remote service answered request `id`.
    RemoveTextCompleted {
        id: RequestId,
        result: RemoteResult<EditedImage>,
    },
    /// Result from the download save dialog.
    DownloadDialogResult(Option<PathBuf>),
    /// The edited image was written (or not).
    DownloadCompleted(Result<PathBuf, Error>),
    /// Periodic tick for toast expiry and the loading indicator.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to load on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over `TEXT_ERASER_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `TEXT_ERASER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
