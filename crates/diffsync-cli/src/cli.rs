//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use diffsync_core::DEFAULT_BASE_BRANCH;

/// Synchronizes file changes from a source to a destination repository.
/// Uses 'git diff' to determine which files to copy or delete.
#[derive(Parser, Debug)]
#[command(name = "diffsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the source repository
    #[arg(long, value_name = "PATH")]
    pub source_repo: PathBuf,

    /// The path to the destination directory
    #[arg(long, value_name = "PATH")]
    pub destination_directory: PathBuf,

    /// The base branch for 'git diff' to determine changes
    #[arg(long, value_name = "NAME", env = "DIFFSYNC_BASE_BRANCH", default_value = DEFAULT_BASE_BRANCH)]
    pub base_branch: String,

    /// Enable detailed output of file operations
    #[arg(long)]
    pub verbose: bool,

    /// Automatically answer yes to confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show the operations that would be performed without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
