use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::core::progress::ProgressTracker;
use crate::error::{NovaError, Result};
use crate::storage::Database;

pub struct AppContext {
    pub nova_root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    pub db: Arc<Database>,
    pub tracker: ProgressTracker<Arc<Database>>,
    pub output_format: OutputFormat,
    pub quiet: bool,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let nova_root = Self::find_nova_root()?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| default_config_path(&nova_root));
        let config = Config::load(cli.config.as_deref(), &nova_root)?;

        let db = Arc::new(Database::open(nova_root.join("nova.db"))?);

        Ok(Self {
            nova_root,
            config_path,
            config,
            db: Arc::clone(&db),
            tracker: ProgressTracker::new(db),
            output_format: cli.output_format(),
            quiet: cli.quiet,
        })
    }

    /// True when output must be a machine-readable envelope.
    pub fn robot_mode(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }

    fn find_nova_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("NOVA_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, ".nova")? {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| NovaError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("nova"))
    }
}

fn default_config_path(nova_root: &Path) -> PathBuf {
    if nova_root.ends_with(".nova") {
        nova_root.join("config.toml")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| nova_root.to_path_buf())
            .join("nova/config.toml")
    }
}

fn find_upwards(start: &Path, name: &str) -> Result<Option<PathBuf>> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Ok(Some(candidate));
        }
        current = dir.parent();
    }
    Ok(None)
}
