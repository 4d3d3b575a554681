use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NovaError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Merge order: defaults <- global config <- root config <- env vars.
    /// An explicit path (flag or `NOVA_CONFIG`) bypasses the global/root pair.
    pub fn load(explicit_path: Option<&Path>, nova_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("NOVA_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(root) = Self::load_root(nova_root)? {
                config.merge_patch(root);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Endpoint of the answer service, or a guidance error if unset.
    pub fn remote_endpoint(&self) -> Result<&str> {
        self.remote
            .endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or_else(|| {
                NovaError::MissingConfig(
                    "remote endpoint is not set; add [remote].endpoint to config.toml \
                     or export NOVA_REMOTE_ENDPOINT"
                        .to_string(),
                )
            })
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&config_dir.join("nova/config.toml"))
    }

    fn load_root(nova_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&nova_root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| NovaError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| NovaError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.remote {
            self.remote.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("NOVA_REMOTE_ENDPOINT") {
            self.remote.endpoint = Some(value);
        }
        if let Some(value) = env_u64("NOVA_REMOTE_TIMEOUT_SECS")? {
            self.remote.timeout = Duration::from_secs(value);
        }
        if let Some(value) = env_bool("NOVA_DISPLAY_CELEBRATE") {
            self.display.celebrate = value;
        }
        if let Some(value) = env_usize("NOVA_DISPLAY_WRAP")? {
            self.display.wrap = value;
        }
        Ok(())
    }
}

/// The answer-generation service this tool forwards questions to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// POST endpoint for question payloads. Required for `nova ask`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout ("30s", "2m", ...).
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: default_timeout(),
        }
    }
}

impl RemoteConfig {
    fn merge(&mut self, patch: RemotePatch) {
        if let Some(value) = patch.endpoint {
            self.endpoint = Some(value);
        }
        if let Some(value) = patch.timeout {
            self.timeout = value;
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show level-up / badge / streak banners after an answer.
    #[serde(default = "default_celebrate")]
    pub celebrate: bool,
    /// Wrap width for answer text in human output. 0 disables wrapping.
    #[serde(default = "default_wrap")]
    pub wrap: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            celebrate: default_celebrate(),
            wrap: default_wrap(),
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.celebrate {
            self.celebrate = value;
        }
        if let Some(value) = patch.wrap {
            self.wrap = value;
        }
    }
}

fn default_celebrate() -> bool {
    true
}

fn default_wrap() -> usize {
    80
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub remote: Option<RemotePatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RemotePatch {
    pub endpoint: Option<String>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub celebrate: Option<bool>,
    pub wrap: Option<usize>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| NovaError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| NovaError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
