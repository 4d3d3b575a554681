//! nova config - Show the effective configuration and where it came from

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::config::Config;
use crate::error::{NovaError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {}

#[derive(Serialize)]
struct ConfigReport<'a> {
    nova_root: &'a Path,
    config_path: &'a Path,
    root_config_path: PathBuf,
    config: &'a Config,
}

pub fn run(ctx: &AppContext, _args: &ConfigArgs) -> Result<()> {
    let root_config = ctx.nova_root.join("config.toml");

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(ConfigReport {
            nova_root: &ctx.nova_root,
            config_path: &ctx.config_path,
            root_config_path: root_config,
            config: &ctx.config,
        })),
        OutputFormat::Plain => {
            println!("{}", render_toml(&ctx.config)?);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title("nova configuration");
            layout.kv("Data directory", &ctx.nova_root.display().to_string());
            layout.kv("Config file", &annotate(&ctx.config_path));
            layout.kv("Root config", &annotate(&root_config));
            layout.blank();
            layout.section("Effective settings");
            layout.push_line(render_toml(&ctx.config)?);
            emit_human(layout);
            Ok(())
        }
    }
}

fn render_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|err| NovaError::Serialization(format!("render config: {err}")))
}

fn annotate(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (missing)", path.display())
    }
}
