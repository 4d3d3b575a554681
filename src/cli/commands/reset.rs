//! nova reset - Wipe learning progress back to a fresh state

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::core::progress::{ProgressEvent, ProgressState};
use crate::error::{NovaError, Result};
use crate::output::messages;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm the reset without prompting
    #[arg(long)]
    pub yes: bool,
}

#[derive(Serialize)]
struct ResetReport<'a> {
    progress: &'a ProgressState,
    events: &'a [ProgressEvent],
}

pub fn run(ctx: &AppContext, args: &ResetArgs) -> Result<()> {
    if !args.yes {
        return Err(NovaError::ApprovalRequired(
            "resetting erases all learning progress; re-run with --yes to confirm".to_string(),
        ));
    }

    let (state, events) = ctx.tracker.reset();

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(ResetReport {
            progress: &state,
            events: &events,
        })),
        OutputFormat::Plain => {
            println!("progress reset");
            Ok(())
        }
        OutputFormat::Human => {
            for event in &events {
                println!("{}", messages::event_banner(event));
            }
            println!();
            println!("{}", messages::progress_footer(&state).dimmed());
            Ok(())
        }
    }
}
