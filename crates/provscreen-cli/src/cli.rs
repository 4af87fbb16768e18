//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Provscreen - Screen artwork provenance for the 1932-1946 era.
#[derive(Debug, Parser)]
#[command(name = "provscreen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PROVSCREEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (accession and verdict only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a batch of records
    Classify(ClassifyArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// JSON file holding an array of records
    pub records: PathBuf,

    /// JSON file mapping provenance narratives to parsed periods
    #[arg(short, long)]
    pub timelines: Option<PathBuf>,

    /// Disable the American-heritage and artist-text heuristics
    #[arg(long)]
    pub strict: bool,

    /// Country cache file
    #[arg(long)]
    pub cache_file: Option<PathBuf>,

    /// Number of records classified concurrently
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Print the per-period trail for every record
    #[arg(long)]
    pub trail: bool,

    /// Print the provenance narrative under each record header
    #[arg(long)]
    pub show_provenance: bool,
}

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
