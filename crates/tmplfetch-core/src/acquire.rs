//! Download of the repository archive.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::info;

use crate::FetchError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::http::make_http_client;
use crate::io::create_with_mode;

/// Mode of the downloaded archive (owner read/write/execute).
const ARCHIVE_MODE: u32 = 0o700;

/// Outcome of [`acquire_archive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    /// A local archive was already present and reused.
    Reused,
    /// The archive was downloaded; carries the body size in bytes.
    Downloaded(u64),
}

/// Returns the archive URL of a repository: trailing slashes are trimmed and
/// `/archive/master.zip` appended.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::archive_url;
///
/// assert_eq!(
///     archive_url("https://github.com/openfaas/faas-cli/"),
///     "https://github.com/openfaas/faas-cli/archive/master.zip"
/// );
/// ```
#[must_use]
pub fn archive_url(repository_url: &str) -> String {
    format!("{}/archive/master.zip", repository_url.trim_end_matches('/'))
}

/// Makes sure `archive_path` holds the repository archive.
///
/// An existing file at `archive_path` is reused as is, without checking that
/// it came from `repository_url`. Otherwise the archive is downloaded in full
/// and only then written, so a failed download never leaves a partial file.
///
/// # Errors
///
/// Returns [`FetchError::Request`] on transport failures,
/// [`FetchError::BadStatus`] on any status other than 200, and
/// [`FetchError::Io`] if the archive cannot be written.
pub fn acquire_archive(
    repository_url: &str,
    archive_path: &Path,
    timeout: Duration,
) -> Result<Acquired> {
    acquire_archive_with_progress(repository_url, archive_path, timeout, &mut NoopProgress)
}

/// Same as [`acquire_archive`], reporting download progress.
///
/// # Errors
///
/// See [`acquire_archive`].
pub fn acquire_archive_with_progress(
    repository_url: &str,
    archive_path: &Path,
    timeout: Duration,
    progress: &mut dyn ProgressCallback,
) -> Result<Acquired> {
    if archive_path.exists() {
        info!(archive = %archive_path.display(), "reusing existing archive");
        return Ok(Acquired::Reused);
    }

    let url = archive_url(repository_url);
    let client = make_http_client(Some(timeout))?;

    info!("HTTP GET {url}");
    progress.on_download_start(&url);
    let response = client
        .get(&url)
        .send()
        .map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::BadStatus {
            url,
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(|source| FetchError::Request {
        url: url.clone(),
        source,
    })?;

    info!("Writing {}Kb to {}", body.len() / 1024, archive_path.display());
    let mut file = create_with_mode(archive_path, ARCHIVE_MODE)?;
    file.write_all(&body)?;
    file.flush()?;

    let size = body.len() as u64;
    progress.on_download_complete(size);
    Ok(Acquired::Downloaded(size))
}
