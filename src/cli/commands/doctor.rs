//! nova doctor - Health checks for storage and configuration
//!
//! Doctor reports, it does not repair: every check runs, issues are listed,
//! and the command still exits 0 so scripted health probes can parse the
//! report.

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_robot, robot_ok};
use crate::core::progress::ProgressState;
use crate::error::Result;
use crate::storage::{PROGRESS_KEY, StateStore};

#[derive(Args, Debug)]
pub struct DoctorArgs {}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

#[derive(Serialize)]
struct CheckOutcome {
    name: &'static str,
    status: CheckStatus,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    checks: Vec<CheckOutcome>,
    passed: bool,
}

pub fn run(ctx: &AppContext, _args: &DoctorArgs) -> Result<()> {
    let checks = vec![
        check_data_dir(ctx),
        check_database(ctx),
        check_progress_record(ctx),
        check_endpoint(ctx),
    ];
    let passed = checks.iter().all(|c| c.status == CheckStatus::Ok);

    if ctx.output_format == OutputFormat::Json {
        return emit_robot(&robot_ok(DoctorReport { checks, passed }));
    }

    if ctx.output_format == OutputFormat::Human {
        println!("{}", "nova doctor - Health Checks".bold());
        println!();
    }

    for check in &checks {
        let marker = match check.status {
            CheckStatus::Ok => "OK".green().to_string(),
            CheckStatus::Warn => "WARN".yellow().to_string(),
            CheckStatus::Fail => "FAIL".red().to_string(),
        };
        println!("Checking {}... {} ({})", check.name, marker, check.detail);
    }

    println!();
    if passed {
        println!("{}", "All checks passed".green().bold());
    } else {
        let issues = checks
            .iter()
            .filter(|c| c.status != CheckStatus::Ok)
            .count();
        println!(
            "{}",
            format!(
                "Found {issues} {}",
                if issues == 1 { "issue" } else { "issues" }
            )
            .yellow()
            .bold()
        );
    }
    Ok(())
}

/// The nova root must exist and accept writes.
fn check_data_dir(ctx: &AppContext) -> CheckOutcome {
    let name = "data directory";
    if let Err(err) = std::fs::create_dir_all(&ctx.nova_root) {
        return CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("cannot create {}: {err}", ctx.nova_root.display()),
        };
    }

    let probe = ctx.nova_root.join(".doctor-probe");
    match std::fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            CheckOutcome {
                name,
                status: CheckStatus::Ok,
                detail: ctx.nova_root.display().to_string(),
            }
        }
        Err(err) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("{} is not writable: {err}", ctx.nova_root.display()),
        },
    }
}

fn check_database(ctx: &AppContext) -> CheckOutcome {
    let name = "database";
    match ctx
        .db
        .conn()
        .query_row("PRAGMA integrity_check", [], |row| row.get::<_, String>(0))
    {
        Ok(verdict) if verdict == "ok" => CheckOutcome {
            name,
            status: CheckStatus::Ok,
            detail: "integrity check passed".to_string(),
        },
        Ok(verdict) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("integrity check reported: {verdict}"),
        },
        Err(err) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("integrity check failed: {err}"),
        },
    }
}

/// A corrupt progress record is a warning, not a failure: sessions continue
/// with default state.
fn check_progress_record(ctx: &AppContext) -> CheckOutcome {
    let name = "progress record";
    match ctx.db.get(PROGRESS_KEY) {
        Ok(None) => CheckOutcome {
            name,
            status: CheckStatus::Ok,
            detail: "no progress recorded yet".to_string(),
        },
        Ok(Some(bytes)) => match serde_json::from_slice::<ProgressState>(&bytes) {
            Ok(state) => CheckOutcome {
                name,
                status: CheckStatus::Ok,
                detail: format!("{} asks recorded", state.searches),
            },
            Err(err) => CheckOutcome {
                name,
                status: CheckStatus::Warn,
                detail: format!("record is corrupt, defaults will be used: {err}"),
            },
        },
        Err(err) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("cannot read record: {err}"),
        },
    }
}

fn check_endpoint(ctx: &AppContext) -> CheckOutcome {
    let name = "remote endpoint";
    let Some(endpoint) = ctx.config.remote.endpoint.as_deref() else {
        return CheckOutcome {
            name,
            status: CheckStatus::Warn,
            detail: "not configured (set NOVA_REMOTE_ENDPOINT or [remote] endpoint)".to_string(),
        };
    };

    match reqwest::Url::parse(endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => CheckOutcome {
            name,
            status: CheckStatus::Ok,
            detail: endpoint.to_string(),
        },
        Ok(url) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("unsupported scheme \"{}\"", url.scheme()),
        },
        Err(err) => CheckOutcome {
            name,
            status: CheckStatus::Fail,
            detail: format!("invalid URL: {err}"),
        },
    }
}
