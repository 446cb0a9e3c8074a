//! Removal of the local archive after a run.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::FetchError;
use crate::Result;

/// Removes the archive at `archive_path`.
///
/// A missing archive is reported as an error: the existence check itself
/// fails and its error is returned.
///
/// # Errors
///
/// Returns [`FetchError::Cleanup`] if the archive does not exist or cannot be
/// removed.
pub fn remove_archive(archive_path: &Path) -> Result<()> {
    info!("Cleaning up zip file...");
    let cleanup_error = |source| FetchError::Cleanup {
        path: archive_path.to_path_buf(),
        source,
    };
    fs::metadata(archive_path).map_err(cleanup_error)?;
    fs::remove_file(archive_path).map_err(cleanup_error)
}
