//! Run reporting and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Outcome of expanding one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Languages whose local directory blocked writing, in archive order.
    pub existing_languages: Vec<String>,

    /// Languages written from the archive, in archive order.
    pub fetched_languages: Vec<String>,

    /// Number of files written.
    pub files_written: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,
}

impl ExpansionReport {
    /// Creates a new empty expansion report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any language was skipped because it already existed.
    #[must_use]
    pub fn has_existing(&self) -> bool {
        !self.existing_languages.is_empty()
    }
}

/// Report of a complete fetch-expand-cleanup cycle.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Repository the templates came from.
    pub source_url: String,

    /// Whether a local `master.zip` was reused instead of downloaded.
    pub archive_reused: bool,

    /// Languages left untouched because they already existed.
    pub existing_languages: Vec<String>,

    /// Languages written from the archive.
    pub fetched_languages: Vec<String>,

    /// Number of files written.
    pub files_written: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the run.
    pub duration: Duration,
}

impl FetchReport {
    pub(crate) fn from_expansion(
        source_url: &str,
        archive_reused: bool,
        expansion: ExpansionReport,
        duration: Duration,
    ) -> Self {
        Self {
            source_url: source_url.to_string(),
            archive_reused,
            existing_languages: expansion.existing_languages,
            fetched_languages: expansion.fetched_languages,
            files_written: expansion.files_written,
            bytes_written: expansion.bytes_written,
            duration,
        }
    }
}

/// Callback trait for progress reporting during a fetch run.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_download_start(&mut self, url: &str) {
///         println!("GET {url}");
///     }
///
///     fn on_download_complete(&mut self, bytes: u64) {
///         println!("{bytes} bytes");
///     }
///
///     fn on_language(&mut self, language: &str, fetched: bool) {
///         println!("{language}: {}", if fetched { "fetched" } else { "kept" });
///     }
///
///     fn on_entry_written(&mut self, path: &Path, bytes: u64) {
///         println!("{} ({bytes} bytes)", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before the archive download starts.
    fn on_download_start(&mut self, url: &str);

    /// Called once the archive body has been written locally.
    fn on_download_complete(&mut self, bytes: u64);

    /// Called when a language root is classified.
    fn on_language(&mut self, language: &str, fetched: bool);

    /// Called after an entry has been materialized.
    fn on_entry_written(&mut self, path: &Path, bytes: u64);

    /// Called when the run completes.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_download_start(&mut self, _url: &str) {}

    fn on_download_complete(&mut self, _bytes: u64) {}

    fn on_language(&mut self, _language: &str, _fetched: bool) {}

    fn on_entry_written(&mut self, _path: &Path, _bytes: u64) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_report_default() {
        let report = ExpansionReport::new();
        assert!(report.existing_languages.is_empty());
        assert!(report.fetched_languages.is_empty());
        assert!(!report.has_existing());
        assert_eq!(report.bytes_written, 0);
    }

    #[test]
    fn test_fetch_report_from_expansion() {
        let expansion = ExpansionReport {
            existing_languages: vec!["go".into()],
            fetched_languages: vec!["node".into()],
            files_written: 2,
            directories_created: 1,
            bytes_written: 42,
        };
        let report = FetchReport::from_expansion(
            "https://example.com/templates",
            true,
            expansion,
            Duration::from_millis(5),
        );
        assert_eq!(report.source_url, "https://example.com/templates");
        assert!(report.archive_reused);
        assert_eq!(report.existing_languages, vec!["go"]);
        assert_eq!(report.fetched_languages, vec!["node"]);
        assert_eq!(report.files_written, 2);
        assert_eq!(report.bytes_written, 42);
    }
}
