//! Configuration for a template fetch run.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Repository used when no URL is supplied.
pub const DEFAULT_TEMPLATE_REPOSITORY: &str = "https://github.com/openfaas/faas-cli";

/// Name of the local archive staging file.
pub const ARCHIVE_NAME: &str = "master.zip";

/// Directory holding the expanded language templates.
pub const TEMPLATE_DIRECTORY: &str = "template";

/// Timeout applied to the archive download.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Settings for one fetch-expand-cleanup cycle.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::FetchConfig;
///
/// let config = FetchConfig::default()
///     .with_repository_url("https://github.com/acme/templates/")
///     .with_overwrite(true);
/// assert_eq!(config.source_url(), "https://github.com/acme/templates/");
/// assert!(config.overwrite);
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Repository hosting `archive/master.zip`. Empty means the default.
    pub repository_url: String,

    /// Directory holding `master.zip` and the `template/` tree.
    pub workdir: PathBuf,

    /// Replace languages that already exist locally.
    pub overwrite: bool,

    /// Download timeout.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    /// Default values:
    /// - `repository_url`: [`DEFAULT_TEMPLATE_REPOSITORY`]
    /// - `workdir`: `.`
    /// - `overwrite`: false
    /// - `timeout`: 120 seconds
    fn default() -> Self {
        Self {
            repository_url: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            workdir: PathBuf::from("."),
            overwrite: false,
            timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Sets the repository URL.
    #[must_use]
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    /// Sets whether existing languages may be overwritten.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets the download timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the repository URL, falling back to the default when empty.
    #[must_use]
    pub fn source_url(&self) -> &str {
        if self.repository_url.is_empty() {
            DEFAULT_TEMPLATE_REPOSITORY
        } else {
            &self.repository_url
        }
    }

    /// Path of the local archive staging file.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.workdir.join(ARCHIVE_NAME)
    }

    /// Path of the local template tree.
    #[must_use]
    pub fn template_dir(&self) -> PathBuf {
        template_dir(&self.workdir)
    }
}

/// Returns the template directory below `workdir`.
#[must_use]
pub fn template_dir(workdir: &Path) -> PathBuf {
    workdir.join(TEMPLATE_DIRECTORY)
}
