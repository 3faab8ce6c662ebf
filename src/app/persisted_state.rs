// SPDX-License-Identifier: MPL-2.0
//! Remembered dialog directories, stored as CBOR in `state.cbor`.
//!
//! This is convenience state, separate from the user-editable
//! `settings.toml`. No image or session data is ever written here.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

/// Directories the open and save dialogs start in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl PersistedState {
    /// Loads from the data directory.
    ///
    /// Never fails: a missing file yields the default, an unreadable one the
    /// default plus the i18n key of a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads from `base_dir` (or the resolved data directory when `None`).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let decoded = fs::File::open(&path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                ciborium::from_reader::<Self, _>(BufReader::new(file)).map_err(|e| e.to_string())
            });

        match decoded {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable state file");
                (
                    Self::default(),
                    Some("notification-state-load-error".to_string()),
                )
            }
        }
    }

    /// Saves to `base_dir` (or the resolved data directory when `None`).
    ///
    /// Returns the i18n key of a warning on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file(base_dir) else {
            return Some("notification-state-save-error".to_string());
        };

        match self.write(&path) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not save state file");
                Some("notification-state-save-error".to_string())
            }
        }
    }

    fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let file = fs::File::create(path).map_err(|e| e.to_string())?;
        ciborium::into_writer(self, BufWriter::new(file)).map_err(|e| e.to_string())
    }

    /// Remembers the directory containing `file_path` for the open dialog.
    pub fn remember_open_file(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_open_directory = Some(parent);
        }
    }

    /// Remembers the directory containing `file_path` for the save dialog.
    pub fn remember_save_file(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_save_directory = Some(parent);
        }
    }
}

fn state_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
}

fn non_empty_parent(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remember_extracts_parent_directory() {
        let mut state = PersistedState::default();
        state.remember_open_file(Path::new("/home/user/photos/image.jpg"));
        state.remember_save_file(Path::new("/home/user/out/edited-image.png"));

        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/out"))
        );
    }

    #[test]
    fn remember_ignores_paths_without_parent() {
        let mut state = PersistedState::default();
        state.remember_open_file(Path::new("/"));
        state.remember_save_file(Path::new("bare.png"));
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");

        let state = PersistedState {
            last_open_directory: Some(PathBuf::from("/pictures")),
            last_save_directory: Some(PathBuf::from("/exports")),
        };

        assert!(state.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = PersistedState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_default_silently() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = PersistedState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn corrupted_file_loads_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write");

        let (state, warning) = PersistedState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-load-error"));
        assert_eq!(state, PersistedState::default());
    }
}
