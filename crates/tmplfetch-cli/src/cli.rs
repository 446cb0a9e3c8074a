//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use tmplfetch_core::config::DEFAULT_TEMPLATE_REPOSITORY;

#[derive(Parser)]
#[command(name = "tmplfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download templates from a repository and expand them locally
    Pull(PullArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PullArgs {
    /// Repository hosting archive/master.zip
    #[arg(value_name = "REPOSITORY_URL", default_value = DEFAULT_TEMPLATE_REPOSITORY)]
    pub repository: String,

    /// Overwrite templates that already exist locally
    #[arg(long)]
    pub overwrite: bool,

    /// Working directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(long, default_value = "120", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
