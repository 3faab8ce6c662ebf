// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a file handed to the intake could not become a session original.
///
/// These never reach the session state machine; they are surfaced as
/// warning toasts and the current session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The file could not be read.
    Io(String),

    /// The file contents are not a recognized image format.
    NotAnImage,

    /// The file is empty.
    Empty,
}

impl IntakeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            IntakeError::Io(_) => "notification-intake-read-error",
            IntakeError::NotAnImage => "notification-intake-not-image",
            IntakeError::Empty => "notification-intake-empty",
        }
    }
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Io(msg) => write!(f, "Unable to read file: {}", msg),
            IntakeError::NotAnImage => write!(f, "File is not a supported image"),
            IntakeError::Empty => write!(f, "File is empty"),
        }
    }
}

impl std::error::Error for IntakeError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_becomes_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("key = = 1").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(message) if !message.is_empty()));
    }

    #[test]
    fn intake_error_display() {
        assert_eq!(
            IntakeError::NotAnImage.to_string(),
            "File is not a supported image"
        );
        assert!(IntakeError::Io("denied".into()).to_string().contains("denied"));
    }

    #[test]
    fn intake_error_i18n_keys() {
        assert_eq!(
            IntakeError::NotAnImage.i18n_key(),
            "notification-intake-not-image"
        );
        assert_eq!(
            IntakeError::Io("x".into()).i18n_key(),
            "notification-intake-read-error"
        );
        assert_eq!(IntakeError::Empty.i18n_key(), "notification-intake-empty");
    }
}
