use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "spec-guard")]
#[command(author, version, about = "Verify that significant source files have sibling test files")]
#[command(long_about = "Walks a source tree and checks that every component, service, guard, \
    directive and pipe has a sibling spec file.\n\n\
    Exit codes:\n  \
    0 - All significant files have tests (or failing is disabled)\n  \
    1 - Test files are missing\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that significant files have sibling test files
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Directory to check (overrides config `root`, default: src/app)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracked file suffixes (comma-separated, e.g., .component.ts,.service.ts)
    #[arg(long, value_delimiter = ',')]
    pub suffix: Option<Vec<String>>,

    /// Substring marking a file as a mock
    #[arg(long)]
    pub mock_identifier: Option<String>,

    /// Maximum directory depth below the root (0 = root only)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Also report files that have a test
    #[arg(long)]
    pub show_tested: bool,

    /// Print file statistics before the verdict
    #[arg(long)]
    pub stats: bool,

    /// Fail when tests are missing (overrides config)
    #[arg(long, conflicts_with = "no_fail")]
    pub fail_on_missing: bool,

    /// Report missing tests without failing
    #[arg(long)]
    pub no_fail: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Exclude files whose content contains this text (repeatable)
    #[arg(long)]
    pub exclude_contains: Vec<String>,

    /// Exclude files whose content matches this regex (repeatable)
    #[arg(long)]
    pub exclude_regex: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Seed for success message selection
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".spec-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
