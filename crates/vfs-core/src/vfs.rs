//! Facade: one API over local paths and remote locators.
//!
//! Every operation classifies its input with [`ResourceLocator::parse`]
//! (or [`is_remote`] when the parts are not needed) and routes to exactly
//! one backend.

use crate::config::VfsConfig;
use crate::error::VfsError;
use crate::local;
use crate::locator::{is_remote, ResourceLocator};
use crate::remote::RemoteAccessor;
use crate::transport::{CurlTransport, HttpTransport};

/// Dispatches reads and existence checks; holds the remote accessor.
#[derive(Debug, Clone, Default)]
pub struct Vfs<T = CurlTransport> {
    remote: RemoteAccessor<T>,
}

impl Vfs<CurlTransport> {
    pub fn from_config(cfg: &VfsConfig) -> Self {
        Self::new(RemoteAccessor::from_config(cfg))
    }
}

impl<T: HttpTransport> Vfs<T> {
    pub fn new(remote: RemoteAccessor<T>) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &RemoteAccessor<T> {
        &self.remote
    }

    /// Reads the resource at `path` as text.
    pub async fn read_file(&self, path: &str) -> Result<String, VfsError> {
        if is_remote(path) {
            self.remote.read(path).await
        } else {
            local::read_file(path).await
        }
    }

    /// Checks whether `path` exists.
    pub async fn exists(&self, path: &str) -> Result<bool, VfsError> {
        if is_remote(path) {
            self.remote.exists(path).await
        } else {
            Ok(local::path_exists(path).await)
        }
    }
}

/// Reads `path` with the default curl transport and retry policies.
pub async fn read_file(path: &str) -> Result<String, VfsError> {
    Vfs::<CurlTransport>::default().read_file(path).await
}

/// Checks `path` with the default curl transport and retry policies.
pub async fn exists(path: &str) -> Result<bool, VfsError> {
    Vfs::<CurlTransport>::default().exists(path).await
}

/// Remote locators are already absolute and come back unchanged.
pub fn path_resolve(path: &str) -> String {
    if is_remote(path) {
        path.to_string()
    } else {
        local::resolve_absolute(path)
    }
}

pub fn path_join(path: &str, segment: &str) -> String {
    match ResourceLocator::parse(path) {
        Some(loc) => loc.join(segment).to_string(),
        None => local::join_segments(path, segment),
    }
}

pub fn path_dir_name(path: &str) -> String {
    match ResourceLocator::parse(path) {
        Some(loc) => loc.parent().to_string(),
        None => local::dir_name(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::{HttpRequest, HttpResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// Answers every request with the same status; counts calls.
    struct Fixed {
        status: u32,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(status: u32) -> Vfs<Self> {
            Vfs::new(RemoteAccessor::new(Self {
                status,
                calls: AtomicUsize::new(0),
            }))
        }
    }

    impl HttpTransport for Fixed {
        async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: self.status,
                body: format!("{} {}", request.method, request.url),
            })
        }
    }

    #[test]
    fn join_remote() {
        assert_eq!(path_join("scheme://host/a", "b"), "scheme://host/a/b");
        assert_eq!(
            path_join("https://github.com", "ts-common"),
            "https://github.com/ts-common"
        );
    }

    #[test]
    fn join_local_delegates() {
        assert_eq!(path_join("folder", "name"), local::join_segments("folder", "name"));
    }

    #[test]
    fn dir_name_remote() {
        assert_eq!(path_dir_name("scheme://host/a/b"), "scheme://host/a");
        assert_eq!(path_dir_name("scheme://host"), "scheme://host");
        assert_eq!(
            path_dir_name("https://raw.example.com/org/repo/abc123/README.md"),
            "https://raw.example.com/org/repo/abc123"
        );
    }

    #[test]
    fn dir_name_local_delegates() {
        assert_eq!(path_dir_name("folder/index.d.ts"), local::dir_name("folder/index.d.ts"));
    }

    #[test]
    fn resolve_remote_is_identity() {
        assert_eq!(path_resolve("scheme://anything"), "scheme://anything");
        assert_eq!(path_resolve("https://github.com"), "https://github.com");
    }

    #[test]
    fn resolve_local_delegates() {
        assert_eq!(path_resolve("index.ts"), local::resolve_absolute("index.ts"));
    }

    #[test]
    fn double_separator_is_treated_as_local() {
        let p = "a://b://c";
        assert_eq!(path_resolve(p), local::resolve_absolute(p));
        assert_eq!(path_join(p, "d"), local::join_segments(p, "d"));
    }

    #[tokio::test]
    async fn read_routes_remote_paths_to_transport() {
        let vfs = Fixed::new(200);
        let body = vfs.read_file("x://host/file").await.unwrap();
        assert_eq!(body, "GET x://host/file");
        assert_eq!(vfs.remote().transport().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn read_routes_local_paths_to_filesystem() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("local.txt");
        std::fs::write(&file, "on disk").unwrap();
        let vfs = Fixed::new(500);
        assert_eq!(vfs.read_file(file.to_str().unwrap()).await.unwrap(), "on disk");
        assert_eq!(vfs.remote().transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn double_separator_read_goes_to_filesystem() {
        let vfs = Fixed::new(200);
        let err = vfs.read_file("a://b://c").await.unwrap_err();
        assert!(matches!(err, VfsError::Io { .. }));
        assert!(!vfs.exists("a://b://c").await.unwrap());
        assert_eq!(vfs.remote().transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exists_routes_by_classification() {
        let dir = tempdir().unwrap();
        let vfs = Fixed::new(404);
        assert!(vfs.exists(dir.path().to_str().unwrap()).await.unwrap());
        assert!(!vfs.exists("https://host/missing").await.unwrap());
        assert_eq!(vfs.remote().transport().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn free_functions_handle_local_paths() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, "free").unwrap();
        let p = file.to_str().unwrap();
        assert!(exists(p).await.unwrap());
        assert_eq!(read_file(p).await.unwrap(), "free");
        assert!(!exists(dir.path().join("nope").to_str().unwrap()).await.unwrap());
    }
}
