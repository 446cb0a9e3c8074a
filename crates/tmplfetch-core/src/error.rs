//! Error types for template fetching and expansion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `FetchError`.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching or expanding a template archive.
#[derive(Error, Debug)]
pub enum FetchError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK.
    #[error("{url} is not valid, status code {status}")]
    BadStatus {
        /// The requested URL.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// Archive is corrupted or not a zip container.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// An archive entry could not be opened.
    #[error("failed to read archive entry #{index}: {source}")]
    Entry {
        /// Position of the entry in the archive.
        index: usize,
        /// Underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The local archive could not be removed after the run.
    #[error("failed to clean up {}: {source}", path.display())]
    Cleanup {
        /// The archive path.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Returns `true` if this error happened while talking to the remote
    /// repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmplfetch_core::FetchError;
    ///
    /// let err = FetchError::BadStatus {
    ///     url: "https://example.com/archive/master.zip".into(),
    ///     status: 404,
    /// };
    /// assert!(err.is_network_error());
    ///
    /// let err = FetchError::InvalidArchive("truncated".into());
    /// assert!(!err.is_network_error());
    /// ```
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::HttpClient(_) | Self::Request { .. } | Self::BadStatus { .. }
        )
    }

    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the URL involved in a network error, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Request { url, .. } | Self::BadStatus { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_display() {
        let err = FetchError::BadStatus {
            url: "https://example.com/archive/master.zip".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "https://example.com/archive/master.zip is not valid, status code 404"
        );
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.url(), Some("https://example.com/archive/master.zip"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FetchError = io_err.into();
        assert!(matches!(err, FetchError::Io(_)));
        assert!(!err.is_network_error());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.url(), None);
    }

    #[test]
    fn test_cleanup_error_keeps_source() {
        use std::error::Error;

        let err = FetchError::Cleanup {
            path: PathBuf::from("master.zip"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("master.zip"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_archive_display() {
        let err = FetchError::InvalidArchive("bad central directory".into());
        assert!(err.to_string().contains("invalid archive"));
        assert!(err.to_string().contains("bad central directory"));
    }
}
