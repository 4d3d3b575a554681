//! nova stats - Show learning progress: level, asks, streak, badges

use chrono::Utc;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::core::progress::{ProgressState, SEARCHES_PER_LEVEL};
use crate::error::Result;
use crate::output::messages;
use crate::utils::{format_relative, meter};

#[derive(Args, Debug)]
pub struct StatsArgs {}

#[derive(Serialize)]
struct StatsReport<'a> {
    progress: &'a ProgressState,
    searches_into_level: u64,
    next_level_at: u64,
    next_badge_at: Option<u64>,
    earned_milestones: Vec<u64>,
}

pub fn run(ctx: &AppContext, _args: &StatsArgs) -> Result<()> {
    let state = ctx.tracker.load();

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(StatsReport {
            progress: &state,
            searches_into_level: state.searches_into_level(),
            next_level_at: state.next_level_at(),
            next_badge_at: state.next_badge_at(),
            earned_milestones: state.earned_milestones(),
        })),
        OutputFormat::Plain => {
            println!("{}", messages::progress_footer(&state));
            Ok(())
        }
        OutputFormat::Human => {
            render_human(&state);
            Ok(())
        }
    }
}

fn render_human(state: &ProgressState) {
    let mut layout = HumanLayout::new();
    layout.title("NOVA Learning Progress");

    layout.kv("Level", &state.level.to_string());
    layout.kv(
        "Next level",
        &format!(
            "{} {}/{} asks",
            meter(state.searches_into_level(), SEARCHES_PER_LEVEL, 10),
            state.searches_into_level(),
            SEARCHES_PER_LEVEL
        ),
    );
    layout.kv("Total asks", &state.searches.to_string());
    layout.kv(
        "Streak",
        &format!(
            "{} {}",
            state.streak,
            if state.streak == 1 { "day" } else { "days" }
        ),
    );
    let last = match state.last_action_at {
        Some(at) => format_relative(Utc::now().signed_duration_since(at).num_seconds()),
        None => "never".to_string(),
    };
    layout.kv("Last activity", &last);
    layout.blank();

    let earned = state.earned_milestones();
    if !earned.is_empty() {
        layout.section("Badges");
        for milestone in earned {
            layout.bullet(&messages::badge_label(milestone));
        }
    }
    if let Some(next) = state.next_badge_at() {
        let remaining = next - state.searches;
        layout.push_line(format!(
            "Next badge at {next} asks ({remaining} to go)"
        ));
    }
    layout.blank();
    layout.push_line(messages::encouragement(state));

    emit_human(layout);
}
