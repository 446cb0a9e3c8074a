//! Pull command implementation.

use crate::cli::PullArgs;
use crate::error::add_fetch_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use std::env;
use std::time::Duration;
use tmplfetch_core::FetchConfig;
use tmplfetch_core::NoopProgress;
use tmplfetch_core::fetch_templates_with_progress;
use tracing::debug;

pub fn execute(args: &PullArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let config = build_config(args)?;
    debug!(
        "Pulling {} into {}",
        config.source_url(),
        config.workdir.display()
    );

    // Spinner only on an interactive terminal with human output
    let report = if !quiet && CliProgress::should_show() {
        let mut progress = CliProgress::new();
        add_fetch_context(
            fetch_templates_with_progress(&config, &mut progress),
            &args.repository,
        )?
    } else {
        let mut noop = NoopProgress;
        add_fetch_context(
            fetch_templates_with_progress(&config, &mut noop),
            &args.repository,
        )?
    };

    formatter.format_fetch_result(&report)?;

    Ok(())
}

fn build_config(args: &PullArgs) -> Result<FetchConfig> {
    let workdir = match &args.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    Ok(FetchConfig::default()
        .with_repository_url(args.repository.as_str())
        .with_workdir(workdir)
        .with_overwrite(args.overwrite)
        .with_timeout(Duration::from_secs(args.timeout)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_from_args() {
        let args = PullArgs {
            repository: "https://github.com/acme/templates".into(),
            overwrite: true,
            dir: Some(PathBuf::from("/tmp/project")),
            timeout: 7,
        };

        let config = build_config(&args).unwrap();

        assert_eq!(config.repository_url, "https://github.com/acme/templates");
        assert_eq!(config.workdir, PathBuf::from("/tmp/project"));
        assert!(config.overwrite);
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_build_config_defaults_to_current_dir() {
        let args = PullArgs {
            repository: String::new(),
            overwrite: false,
            dir: None,
            timeout: 120,
        };

        let config = build_config(&args).unwrap();

        assert_eq!(config.workdir, env::current_dir().unwrap());
        assert_eq!(config.source_url(), tmplfetch_core::config::DEFAULT_TEMPLATE_REPOSITORY);
    }
}
