//! Exists command: print `true` or `false`.

use anyhow::{Context, Result};
use vfs_core::Vfs;

/// Prints and returns whether `path` exists.
pub async fn run_exists(vfs: &Vfs, path: &str) -> Result<bool> {
    let found = vfs
        .exists(path)
        .await
        .with_context(|| format!("check {}", path))?;
    println!("{}", found);
    Ok(found)
}
