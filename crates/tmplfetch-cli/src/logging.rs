//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Installs a stderr subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), LevelFilter::WARN);
        assert_eq!(level_for(true, false), LevelFilter::DEBUG);
        assert_eq!(level_for(false, true), LevelFilter::ERROR);
    }
}
