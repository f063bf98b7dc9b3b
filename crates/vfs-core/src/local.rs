//! Local filesystem backend.
//!
//! Thin pass-through to `tokio::fs` and `std::path`. Path results are
//! normalized lexically (`.` dropped, `..` folded) without touching the disk,
//! so symlinks are not resolved.

use crate::error::VfsError;
use std::path::{Component, Path, PathBuf};

/// Reads the whole file and decodes it as UTF-8 (invalid sequences replaced).
pub async fn read_file(path: &str) -> Result<String, VfsError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| VfsError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// True if `path` exists. Errors while checking count as "does not exist".
pub async fn path_exists(path: &str) -> bool {
    match tokio::fs::try_exists(path).await {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!(path, error = %e, "exists check failed, treating as missing");
            false
        }
    }
}

/// Absolute form of `path`, relative paths anchored at the current directory.
pub fn resolve_absolute(path: &str) -> String {
    let p = Path::new(path);
    let joined = if p.is_absolute() {
        p.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(p),
            Err(e) => {
                tracing::warn!(error = %e, "current directory unavailable; resolving lexically");
                p.to_path_buf()
            }
        }
    };
    to_string(&normalize(&joined))
}

/// Joins `segment` onto `base` with the platform separator. The segment is
/// always appended: a leading root or drive prefix on it is ignored.
pub fn join_segments(base: &str, segment: &str) -> String {
    let mut joined = PathBuf::from(base);
    for comp in Path::new(segment).components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other),
        }
    }
    to_string(&normalize(&joined))
}

/// Parent directory of `path`; `"."` when there is none, root stays root.
pub fn dir_name(path: &str) -> String {
    let p = Path::new(path);
    match p.parent() {
        Some(parent) if parent.as_os_str().is_empty() => ".".to_string(),
        Some(parent) => to_string(parent),
        None if p.has_root() => path.to_string(),
        None => ".".to_string(),
    }
}

/// Lexical normalization: drops `.`, folds `name/..`, keeps leading `..` on
/// relative paths and never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            _ => parts.push(comp),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

fn to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
