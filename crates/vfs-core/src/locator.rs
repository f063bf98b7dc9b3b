//! Remote path classification.
//!
//! A path is remote when splitting it on `://` yields exactly two parts:
//! the scheme before the separator and the remainder after it. Anything
//! else (no separator, or a remainder containing another `://`) is a local
//! path. The scheme is opaque; no allow-list is applied.

use std::fmt;

/// Separator between scheme and remainder.
pub const SCHEME_SEPARATOR: &str = "://";

/// A remote path split into `scheme` and `remainder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    pub scheme: String,
    pub remainder: String,
}

impl ResourceLocator {
    /// Classifies `input`. Returns `None` for local paths.
    ///
    /// # Examples
    ///
    /// - `parse("https://host/a")` → scheme `"https"`, remainder `"host/a"`
    /// - `parse("dir/file.txt")` → `None`
    /// - `parse("a://b://c")` → `None` (three parts)
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split(SCHEME_SEPARATOR);
        let scheme = parts.next()?;
        let remainder = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            scheme: scheme.to_string(),
            remainder: remainder.to_string(),
        })
    }

    /// Appends `segment` as a new trailing `/` component of the remainder.
    pub fn join(&self, segment: &str) -> Self {
        let mut components: Vec<&str> = self.remainder.split('/').collect();
        components.push(segment);
        Self {
            scheme: self.scheme.clone(),
            remainder: components.join("/"),
        }
    }

    /// Drops the last `/` component of the remainder. A single-component
    /// remainder (a bare host) has no parent and is returned unchanged.
    pub fn parent(&self) -> Self {
        let components: Vec<&str> = self.remainder.split('/').collect();
        let remainder = if components.len() <= 1 {
            self.remainder.clone()
        } else {
            components[..components.len() - 1].join("/")
        };
        Self {
            scheme: self.scheme.clone(),
            remainder,
        }
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SCHEME_SEPARATOR, self.remainder)
    }
}

/// True when `input` classifies as a remote path.
pub fn is_remote(input: &str) -> bool {
    ResourceLocator::parse(input).is_some()
}
