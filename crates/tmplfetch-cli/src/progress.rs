//! Spinner shown while a pull runs.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;
use std::time::Duration;
use tmplfetch_core::ProgressCallback;

/// CLI spinner implementing `ProgressCallback`.
///
/// Shows the current phase (download, expansion) and a running count of
/// written entries. Automatically cleans up on drop.
pub struct CliProgress {
    spinner: ProgressBar,
    entries: u64,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a new spinner.
    #[must_use]
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            spinner,
            entries: 0,
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_download_start(&mut self, url: &str) {
        self.spinner.set_message(format!("Downloading {url}"));
    }

    fn on_download_complete(&mut self, bytes: u64) {
        self.spinner
            .set_message(format!("Downloaded {}", humanize_bytes(bytes)));
    }

    fn on_language(&mut self, language: &str, fetched: bool) {
        if fetched {
            self.spinner.set_message(format!("Expanding {language}"));
        }
    }

    fn on_entry_written(&mut self, _path: &Path, bytes: u64) {
        self.entries += 1;
        self.bytes_written += bytes;
        self.spinner.set_message(format!(
            "Expanded {} entries ({})",
            self.entries,
            humanize_bytes(self.bytes_written)
        ));
    }

    fn on_complete(&mut self) {
        self.spinner.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB).
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
