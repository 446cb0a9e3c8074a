//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use tmplfetch_core::FetchReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct PullOutput<'a> {
    source_url: &'a str,
    archive_reused: bool,
    existing_languages: &'a [String],
    fetched_languages: &'a [String],
    files_written: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl<'a> PullOutput<'a> {
    fn from_report(report: &'a FetchReport) -> Self {
        Self {
            source_url: &report.source_url,
            archive_reused: report.archive_reused,
            existing_languages: &report.existing_languages,
            fetched_languages: &report.fetched_languages,
            files_written: report.files_written,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_fetch_result(&self, report: &FetchReport) -> Result<()> {
        let output = JsonOutput::success("pull", PullOutput::from_report(report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("pull", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, _message: &str) {}

    fn format_warning(&self, _message: &str) {}
}
