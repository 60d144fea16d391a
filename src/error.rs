// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Document(DocumentError),
}

/// Failures reported by the document renderer.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No document locator was configured for the preview.
    NotConfigured,

    /// The locator does not point to an existing file or directory.
    NotFound(String),

    /// The document exists but has no renderable page.
    Empty,

    /// The file type cannot be rendered as a page.
    UnsupportedFormat(String),

    /// The requested page is past the end of the document.
    PageOutOfRange(u32),

    /// A page exists but could not be decoded.
    DecodingFailed(String),

    /// I/O error (permission denied, unreadable directory, etc.)
    IoError(String),
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::NotConfigured => "preview-error-not-configured",
            DocumentError::NotFound(_) => "preview-error-not-found",
            DocumentError::Empty => "preview-error-empty",
            DocumentError::UnsupportedFormat(_) => "preview-error-unsupported",
            DocumentError::PageOutOfRange(_) => "preview-error-page-out-of-range",
            DocumentError::DecodingFailed(_) => "preview-error-decoding",
            DocumentError::IoError(_) => "preview-error-io",
        }
    }

    /// Maps an I/O failure on `path` to the closest document error.
    pub fn from_io(err: &std::io::Error, path: &str) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DocumentError::NotFound(path.to_string()),
            _ => DocumentError::IoError(format!("{path}: {err}")),
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotConfigured => write!(f, "No preview document configured"),
            DocumentError::NotFound(path) => write!(f, "Document not found: {}", path),
            DocumentError::Empty => write!(f, "Document has no pages"),
            DocumentError::UnsupportedFormat(path) => {
                write!(f, "Unsupported page format: {}", path)
            }
            DocumentError::PageOutOfRange(page) => write!(f, "Page {} does not exist", page),
            DocumentError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            DocumentError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
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
    fn document_error_wraps_into_error() {
        let err: Error = DocumentError::Empty.into();
        assert_eq!(format!("{}", err), "Document Error: Document has no pages");
    }

    #[test]
    fn from_io_maps_missing_file_to_not_found() {
        let io_error = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = DocumentError::from_io(&io_error, "/tmp/missing");
        assert_eq!(err, DocumentError::NotFound("/tmp/missing".to_string()));
    }

    #[test]
    fn from_io_keeps_other_failures_as_io() {
        let io_error = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = DocumentError::from_io(&io_error, "/root/pages");
        assert!(matches!(err, DocumentError::IoError(msg) if msg.starts_with("/root/pages")));
    }

    #[test]
    fn document_error_i18n_keys() {
        assert_eq!(
            DocumentError::NotConfigured.i18n_key(),
            "preview-error-not-configured"
        );
        assert_eq!(DocumentError::Empty.i18n_key(), "preview-error-empty");
        assert_eq!(
            DocumentError::PageOutOfRange(3).i18n_key(),
            "preview-error-page-out-of-range"
        );
    }
}
