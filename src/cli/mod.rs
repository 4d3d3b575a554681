//! Command-line interface: argument parsing and command dispatch.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "nova",
    version,
    about = "Ask questions, get clean answers, level up your learning streak",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (bypasses global and root configs)
    #[arg(long, global = true, value_name = "PATH", env = "NOVA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Robot mode: machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (overrides --robot)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging entirely
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Effective output format: an explicit `--format` wins, then `--robot`,
    /// then human output.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        if self.robot {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}
