use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Retry parameters for remote reads (`[read]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Retries after the first attempt on transport failure.
    pub max_retries: u32,
    /// Delay between attempts in milliseconds (0 = immediate).
    pub delay_ms: u64,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_ms: 0,
        }
    }
}

/// Retry parameters for existence probes (`[exists]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExistsConfig {
    /// Backoff schedule in milliseconds; one retry per entry.
    pub backoff_ms: Vec<u64>,
    /// Timeout for each HEAD request in seconds.
    pub head_timeout_secs: u64,
}

impl Default for ExistsConfig {
    fn default() -> Self {
        Self {
            backoff_ms: vec![1000, 3000, 7000],
            head_timeout_secs: 60,
        }
    }
}

/// Global configuration loaded from `~/.config/vfs/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsConfig {
    #[serde(default)]
    pub read: ReadConfig,
    #[serde(default)]
    pub exists: ExistsConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vfs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VfsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VfsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VfsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
