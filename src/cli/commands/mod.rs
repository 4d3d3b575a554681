//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod ask;
pub mod config;
pub mod doctor;
pub mod reset;
pub mod stats;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask NOVA a question
    Ask(ask::AskArgs),

    /// Show learning progress (level, asks, streak, badges)
    Stats(stats::StatsArgs),

    /// Reset all learning progress
    Reset(reset::ResetArgs),

    /// Health checks for storage and configuration
    Doctor(doctor::DoctorArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Ask(args) => ask::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Reset(args) => reset::run(ctx, args),
        Commands::Doctor(args) => doctor::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
