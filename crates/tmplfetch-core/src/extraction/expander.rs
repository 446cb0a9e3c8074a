//! Selective expansion of a template archive.
//!
//! Entries are processed one at a time in the order the zip central directory
//! lists them. Each entry is either skipped entirely or fully materialized.
//! The first failure aborts the run and leaves already written entries on
//! disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ExpansionReport;
use crate::FetchError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::io::mkdir_chain;
use crate::io::write_file;
use crate::policy::LanguageProbe;
use crate::policy::OverwritePolicy;
use crate::policy::TemplateDirProbe;

use super::classify::EntryKind;
use super::classify::TEMPLATE_PREFIX;
use super::classify::classify;
use super::classify::directory_of;
use super::classify::is_contained;
use super::classify::is_directory;
use super::classify::relative_path;

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Expands the `template/` tree of an archive into a working directory.
#[derive(Debug)]
pub struct TemplateExpander<P> {
    workdir: PathBuf,
    overwrite: bool,
    policy: OverwritePolicy<P>,
    buffer: CopyBuffer,
}

impl TemplateExpander<TemplateDirProbe> {
    /// Creates an expander writing below `workdir`, probing
    /// `<workdir>/template` for existing languages.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>, overwrite: bool) -> Self {
        let workdir = workdir.into();
        let probe = TemplateDirProbe::new(&workdir);
        Self::with_probe(workdir, probe, overwrite)
    }
}

impl<P: LanguageProbe> TemplateExpander<P> {
    /// Creates an expander with a custom existence probe.
    #[must_use]
    pub fn with_probe(workdir: impl Into<PathBuf>, probe: P, overwrite: bool) -> Self {
        Self {
            workdir: workdir.into(),
            overwrite,
            policy: OverwritePolicy::new(probe),
            buffer: CopyBuffer::new(),
        }
    }

    /// Returns the policy cache of this run.
    #[must_use]
    pub fn policy(&self) -> &OverwritePolicy<P> {
        &self.policy
    }

    /// Expands `archive_path`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidArchive`] if the file is not a zip
    /// container, [`FetchError::Entry`] if an entry cannot be opened, and
    /// [`FetchError::Io`] if a directory or file cannot be written.
    pub fn expand(
        &mut self,
        archive_path: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExpansionReport> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| {
            FetchError::InvalidArchive(format!("failed to open ZIP archive: {e}"))
        })?;

        let mut report = ExpansionReport::new();

        for index in 0..archive.len() {
            let name = archive
                .name_for_index(index)
                .ok_or(FetchError::Entry {
                    index,
                    source: zip::result::ZipError::FileNotFound,
                })?
                .to_owned();
            let relative = relative_path(&name);
            if !is_contained(relative) {
                if relative.starts_with(TEMPLATE_PREFIX) {
                    warn!(entry = %name, "skipping entry that escapes the working directory");
                }
                continue;
            }

            match classify(relative) {
                EntryKind::NotTemplate | EntryKind::RootMarker => continue,
                EntryKind::LanguageRoot { language } => {
                    let writable = self.policy.decide(language, self.overwrite);
                    progress.on_language(language, writable);
                    if !writable {
                        info!(language, "language already exists, skipping");
                        report.existing_languages.push(language.to_string());
                        continue;
                    }
                    report.fetched_languages.push(language.to_string());
                }
                EntryKind::LanguageChild { language } => {
                    if !self.policy.decide(language, self.overwrite) {
                        continue;
                    }
                }
            }

            let mut entry = archive
                .by_index(index)
                .map_err(|source| FetchError::Entry { index, source })?;
            let mode = entry.unix_mode();
            let size = entry.size();
            self.materialize(relative, mode, &mut entry, size, &mut report, progress)?;
        }

        Ok(report)
    }

    fn materialize<R: std::io::Read>(
        &mut self,
        relative: &str,
        unix_mode: Option<u32>,
        reader: &mut R,
        size: u64,
        report: &mut ExpansionReport,
        progress: &mut dyn ProgressCallback,
    ) -> Result<()> {
        let directory = is_directory(relative);
        let mode = permission_bits(unix_mode, directory);
        let dir_mode = if directory { mode } else { searchable(mode) };

        mkdir_chain(&self.workdir.join(directory_of(relative)), dir_mode)?;

        let target = self.workdir.join(relative);
        if directory {
            report.directories_created += 1;
            progress.on_entry_written(&target, 0);
            return Ok(());
        }

        let written = write_file(&target, mode, reader, size, &mut self.buffer)?;
        debug!(path = relative, bytes = written, "expanded entry");
        report.files_written += 1;
        report.bytes_written += written;
        progress.on_entry_written(&target, written);
        Ok(())
    }
}

/// Expands `archive_path` into `workdir` with a fresh policy cache.
///
/// # Errors
///
/// See [`TemplateExpander::expand`].
pub fn expand_templates(
    archive_path: &Path,
    workdir: &Path,
    overwrite: bool,
) -> Result<ExpansionReport> {
    TemplateExpander::new(workdir, overwrite).expand(archive_path, &mut NoopProgress)
}

fn permission_bits(unix_mode: Option<u32>, directory: bool) -> u32 {
    match unix_mode {
        Some(mode) => mode & 0o777,
        None if directory => DEFAULT_DIR_MODE,
        None => DEFAULT_FILE_MODE,
    }
}

/// Mode for directories created on behalf of a file: the owner always gets
/// full access and every class that may read also gets search permission.
fn searchable(mode: u32) -> u32 {
    mode | 0o700 | ((mode & 0o044) >> 2)
}
