// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Specific error types for invalid photo manifests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// The manifest is not valid TOML or does not match the expected layout
    Parse(String),

    /// A photo has an empty or whitespace-only category
    EmptyCategory { id: String },

    /// Two photos share the same id
    DuplicateId(String),
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Parse(_) => "error-manifest-parse",
            ManifestError::EmptyCategory { .. } => "error-manifest-empty-category",
            ManifestError::DuplicateId(_) => "error-manifest-duplicate-id",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Parse(msg) => write!(f, "Invalid manifest: {}", msg),
            ManifestError::EmptyCategory { id } => {
                write!(f, "Photo '{}' has an empty category", id)
            }
            ManifestError::DuplicateId(id) => write!(f, "Duplicate photo id: {}", id),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-gallery-io",
            Error::Config(_) => "error-load-gallery-config",
            Error::Manifest(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
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
    fn manifest_error_wraps_into_error() {
        let err: Error = ManifestError::DuplicateId("beach".into()).into();
        assert!(matches!(err, Error::Manifest(ManifestError::DuplicateId(ref id)) if id == "beach"));
        assert_eq!(format!("{}", err), "Manifest Error: Duplicate photo id: beach");
    }

    #[test]
    fn manifest_error_display_names_photo() {
        let err = ManifestError::EmptyCategory { id: "p3".into() };
        assert!(format!("{}", err).contains("p3"));
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(
            ManifestError::Parse(String::new()).i18n_key(),
            "error-manifest-parse"
        );
        assert_eq!(
            Error::from(ManifestError::EmptyCategory { id: "x".into() }).i18n_key(),
            "error-manifest-empty-category"
        );
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-gallery-io");
    }
}
