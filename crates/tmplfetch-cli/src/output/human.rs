//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::progress::humanize_bytes;
use anyhow::Result;
use console::Term;
use console::style;
use tmplfetch_core::FetchReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn fetched_line(report: &FetchReport) -> String {
        format!(
            "Fetched {} template(s) : {:?} from {}",
            report.fetched_languages.len(),
            report.fetched_languages,
            report.source_url
        )
    }

    fn existing_line(report: &FetchReport) -> String {
        format!(
            "Cannot overwrite the following {} template(s): {:?}",
            report.existing_languages.len(),
            report.existing_languages
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_fetch_result(&self, report: &FetchReport) -> Result<()> {
        if !report.existing_languages.is_empty() {
            self.format_warning(&Self::existing_line(report));
            if !self.quiet {
                let _ = self
                    .term
                    .write_line("  Use --overwrite to replace them.");
            }
        }

        self.format_success(&Self::fetched_line(report));

        if self.verbose && !self.quiet {
            let _ = self
                .term
                .write_line(&format!("  Files written: {}", report.files_written));
            let _ = self.term.write_line(&format!(
                "  Total size: {}",
                humanize_bytes(report.bytes_written)
            ));
            let _ = self.term.write_line(&format!(
                "  Archive: {}",
                if report.archive_reused {
                    "reused local master.zip"
                } else {
                    "downloaded"
                }
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
