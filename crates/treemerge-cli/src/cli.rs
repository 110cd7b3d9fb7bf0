//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "treemerge")]
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
    /// Merge a directory tree into a text archive
    Merge(MergeArgs),
    /// Reconstruct a directory tree from a text archive
    Extract(ExtractArgs),
    /// Restore one project's subtree from a text archive
    Restore(RestoreArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct MergeArgs {
    /// Source directory to merge
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output archive file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exclusion pattern (name, fragment, or *.ext; can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Start from an empty rule set instead of the built-in excludes
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Compute paths against the source's parent so the top-level folder
    /// name appears inside the archive (required for scoped restore)
    #[arg(long)]
    pub parent_base: bool,

    /// Metadata pair for the leading MERGE_INFO line (can be repeated)
    #[arg(long = "info", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub info: Vec<(String, String)>,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (default: current directory)
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct RestoreArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Project name whose subtree should be restored
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Destination directory (default: current directory)
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,
}

/// Parses a `key=value` argument.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}
