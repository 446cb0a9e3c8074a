//! High-level public API: one fetch-expand-cleanup cycle.

use std::time::Instant;

use tracing::info;

use crate::FetchConfig;
use crate::FetchReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::acquire::Acquired;
use crate::acquire::acquire_archive_with_progress;
use crate::cleanup::remove_archive;
use crate::extraction::TemplateExpander;

/// Fetches the templates of `config.repository_url` into `config.workdir`.
///
/// Runs the acquirer, expands the archive with a fresh overwrite policy and
/// removes the archive afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be downloaded or written
/// - The archive is not a valid zip container
/// - An entry cannot be expanded (entries written before stay on disk)
/// - The archive cannot be removed afterwards, even though every template
///   was written
///
/// # Examples
///
/// ```no_run
/// use tmplfetch_core::FetchConfig;
/// use tmplfetch_core::fetch_templates;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FetchConfig::default().with_repository_url("https://github.com/acme/templates");
/// let report = fetch_templates(&config)?;
/// println!("Fetched {} template(s)", report.fetched_languages.len());
/// # Ok(())
/// # }
/// ```
pub fn fetch_templates(config: &FetchConfig) -> Result<FetchReport> {
    fetch_templates_with_progress(config, &mut NoopProgress)
}

/// Same as [`fetch_templates`], reporting progress to `progress`.
///
/// # Errors
///
/// See [`fetch_templates`].
pub fn fetch_templates_with_progress(
    config: &FetchConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<FetchReport> {
    let start = Instant::now();
    let source_url = config.source_url();
    let archive = config.archive_path();

    let acquired =
        match acquire_archive_with_progress(source_url, &archive, config.timeout, progress) {
            Ok(acquired) => acquired,
            Err(err) => {
                // the archive usually does not exist at this point
                let _ = remove_archive(&archive);
                return Err(err);
            }
        };

    info!("Attempting to expand templates from {}", archive.display());

    let mut expander = TemplateExpander::new(&config.workdir, config.overwrite);
    let expansion = expander.expand(&archive, progress)?;

    if expansion.has_existing() {
        info!(
            "Cannot overwrite the following {} directories: {:?}",
            expansion.existing_languages.len(),
            expansion.existing_languages
        );
    }
    info!(
        "Fetched {} template(s) : {:?} from {}",
        expansion.fetched_languages.len(),
        expansion.fetched_languages,
        source_url
    );

    remove_archive(&archive)?;
    progress.on_complete();

    Ok(FetchReport::from_expansion(
        source_url,
        acquired == Acquired::Reused,
        expansion,
        start.elapsed(),
    ))
}
