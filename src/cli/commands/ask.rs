//! nova ask - Send a question to the answer service and record progress
//!
//! The flow mirrors the product behavior: progress is recorded on every
//! parseable success response (even one with no usable output), while
//! transport failures and bad statuses render a fallback message and leave
//! progress untouched. Remote failures are an answer, not an error: the
//! command still exits 0.

use chrono::Utc;
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::core::progress::{ProgressEvent, ProgressState};
use crate::core::{bullet_points, clean};
use crate::error::{NovaError, Result};
use crate::output::messages;
use crate::remote::{AnswerClient, AskRequest};
use crate::utils::truncate_chars;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, as free words (quoting is optional)
    #[arg(value_name = "QUESTION", trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Also list the answer's key points as bullets
    #[arg(long)]
    pub bullets: bool,
}

#[derive(Serialize)]
struct AskReport<'a> {
    question: &'a str,
    answer: &'a str,
    bullets: &'a [String],
    recorded: bool,
    progress: &'a ProgressState,
    events: &'a [ProgressEvent],
}

pub fn run(ctx: &AppContext, args: &AskArgs) -> Result<()> {
    let question = args.question.join(" ").trim().to_string();
    if question.is_empty() {
        return Err(NovaError::InvalidQuestion(
            "please enter a question to search for answers".to_string(),
        ));
    }

    let endpoint = ctx.config.remote_endpoint()?;
    let client = AnswerClient::new(endpoint, ctx.config.remote.timeout)?;

    let current = ctx.tracker.load();
    let now = Utc::now();
    let request = AskRequest::new(&question, &current, now);

    let spinner = thinking_spinner(ctx);
    let outcome = client.ask(&request);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let (answer, bullets, state, events, recorded) = match outcome {
        Ok(reply) => {
            let (next, events) = ctx.tracker.record_action(&current, now);
            match reply.text() {
                Some(text) => {
                    let cleaned = clean(text);
                    let bullets = bullet_points(&cleaned);
                    (cleaned, bullets, next, events, true)
                }
                None => {
                    debug!("success response carried no usable output");
                    (
                        messages::FALLBACK_NO_OUTPUT.to_string(),
                        Vec::new(),
                        next,
                        events,
                        true,
                    )
                }
            }
        }
        Err(NovaError::RemoteStatus(code)) => {
            warn!(status = code, "answer service rejected the question");
            (
                messages::FALLBACK_BAD_STATUS.to_string(),
                Vec::new(),
                current,
                Vec::new(),
                false,
            )
        }
        Err(NovaError::RemoteUnavailable(reason)) => {
            warn!(%reason, "answer service unreachable");
            (
                messages::FALLBACK_CONNECTION.to_string(),
                Vec::new(),
                current,
                Vec::new(),
                false,
            )
        }
        Err(other) => return Err(other),
    };

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(AskReport {
            question: &question,
            answer: &answer,
            bullets: &bullets,
            recorded,
            progress: &state,
            events: &events,
        })),
        OutputFormat::Human => {
            render_human(ctx, args, &question, &answer, &bullets, &state, &events);
            Ok(())
        }
        OutputFormat::Plain => {
            render_plain(args, &answer, &bullets, &state);
            Ok(())
        }
    }
}

fn thinking_spinner(ctx: &AppContext) -> Option<ProgressBar> {
    if ctx.output_format != OutputFormat::Human || ctx.quiet {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("NOVA is thinking about your question...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(pb)
}

fn render_human(
    ctx: &AppContext,
    args: &AskArgs,
    question: &str,
    answer: &str,
    bullets: &[String],
    state: &ProgressState,
    events: &[ProgressEvent],
) {
    println!(
        "{} {}",
        "You asked:".dimmed(),
        truncate_chars(question, 80)
    );
    println!();

    let wrap = ctx.config.display.wrap;
    if wrap == 0 {
        println!("{answer}");
    } else {
        println!("{}", textwrap::fill(answer, wrap));
    }

    if args.bullets && !bullets.is_empty() {
        println!();
        println!("{}", "Key points:".bold());
        for point in bullets {
            println!("  - {point}");
        }
    }

    if ctx.config.display.celebrate && !events.is_empty() {
        println!();
        for event in events {
            println!("{}", messages::event_banner(event));
        }
    }

    println!();
    println!("{}", messages::progress_footer(state).dimmed());
}

fn render_plain(args: &AskArgs, answer: &str, bullets: &[String], state: &ProgressState) {
    println!("{answer}");
    if args.bullets && !bullets.is_empty() {
        println!();
        for point in bullets {
            println!("- {point}");
        }
    }
    println!();
    println!("{}", messages::progress_footer(state));
}
