use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "rolodeck")]
#[command(about = "Browse a searchable directory of randomly generated people", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (default: <config_dir>/rolodeck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the profile API endpoint
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by every command that needs a batch of profiles.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// How many profiles to fetch
    #[arg(long, short = 'c')]
    pub count: Option<usize>,

    /// Comma-separated nationality codes to request (e.g. us,ca,gb,au)
    #[arg(long, value_delimiter = ',')]
    pub nat: Option<Vec<String>>,

    /// Load profiles from a JSON file (captured API response or bare
    /// record array) instead of the network
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive directory browser (default)")]
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },

    #[command(about = "Print the directory to stdout")]
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Only print profiles whose name matches this text
        #[arg(long)]
        search: Option<String>,
    },
}
