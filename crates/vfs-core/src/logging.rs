//! Tracing subscriber setup: log file under the XDG state dir, or stderr.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// XDG prefix; `BaseDirectories::with_prefix` already appends it.
const APP_PREFIX: &str = "vfs";
const LOG_FILE_NAME: &str = "vfs.log";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,vfs_core=info";

/// `$XDG_STATE_HOME/vfs/vfs.log` (usually `~/.local/state/vfs/vfs.log`).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Installs a subscriber appending to [`log_file_path`] and returns the path.
/// On failure (state dir unwritable, subscriber already set) returns Err so
/// the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install subscriber: {}", e))?;

    tracing::info!("vfs logging initialized at {}", path.display());
    Ok(path)
}

/// Logs to stderr. A no-op if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
