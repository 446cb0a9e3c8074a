//! Error conversion utilities for CLI.
//!
//! Converts tmplfetch-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use tmplfetch_core::FetchError;

/// Converts `FetchError` to user-friendly anyhow error with context
pub fn convert_fetch_error(err: FetchError, repository: &str) -> anyhow::Error {
    match err {
        FetchError::BadStatus { url, status: 404 } => {
            anyhow!(
                "Template archive not found: {url} (status code 404)\n\
                 HINT: Check that '{repository}' exists and has a 'master' branch."
            )
        }
        FetchError::BadStatus { url, status } => {
            anyhow!("{url} is not valid, status code {status}")
        }
        FetchError::Request { url, source } => {
            anyhow!(
                "Could not download {url}: {source}\n\
                 HINT: Check your network connection or raise --timeout."
            )
        }
        FetchError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid template archive: {reason}\n\
                 HINT: A stale or corrupted master.zip in the working directory is reused as is. \
                 Remove it and try again."
            )
        }
        FetchError::Cleanup { path, source } => {
            anyhow!(
                "Templates were expanded but {} could not be removed: {source}",
                path.display()
            )
        }
        FetchError::Io(io_err) => {
            anyhow!(
                "I/O error while expanding templates from '{repository}': {io_err}\n\
                 HINT: Templates written before the failure were left in place."
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error fetching templates from '{repository}'")),
    }
}

/// Adds context to a fetch result
pub fn add_fetch_context<T>(
    result: Result<T, FetchError>,
    repository: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_fetch_error(e, repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_not_found() {
        let err = FetchError::BadStatus {
            url: "https://example.com/t/archive/master.zip".into(),
            status: 404,
        };
        let msg = format!("{:?}", convert_fetch_error(err, "https://example.com/t"));
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/t/archive/master.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_other_status() {
        let err = FetchError::BadStatus {
            url: "https://example.com/t/archive/master.zip".into(),
            status: 503,
        };
        let msg = format!("{}", convert_fetch_error(err, "https://example.com/t"));
        assert!(msg.contains("status code 503"));
    }

    #[test]
    fn test_convert_invalid_archive() {
        let err = FetchError::InvalidArchive("bad magic".into());
        let msg = format!("{:?}", convert_fetch_error(err, "repo"));
        assert!(msg.contains("bad magic"));
        assert!(msg.contains("master.zip"));
    }

    #[test]
    fn test_convert_io_error() {
        let err = FetchError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let msg = format!("{:?}", convert_fetch_error(err, "repo"));
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_convert_cleanup_error() {
        let err = FetchError::Cleanup {
            path: PathBuf::from("master.zip"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = format!("{}", convert_fetch_error(err, "repo"));
        assert!(msg.contains("could not be removed"));
    }
}
