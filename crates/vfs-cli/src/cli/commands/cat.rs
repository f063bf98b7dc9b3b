//! Cat command: print a local file or remote resource.

use anyhow::{Context, Result};
use std::io::Write;
use vfs_core::Vfs;

pub async fn run_cat(vfs: &Vfs, path: &str) -> Result<()> {
    let text = vfs
        .read_file(path)
        .await
        .with_context(|| format!("read {}", path))?;
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
