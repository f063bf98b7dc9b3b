//! Uniform access to local files and remote (`<scheme>://...`) resources.
//!
//! ```no_run
//! # async fn demo() -> Result<(), vfs_core::VfsError> {
//! let readme = vfs_core::path_join("https://example.com/repo", "README.md");
//! if vfs_core::exists(&readme).await? {
//!     println!("{}", vfs_core::read_file(&readme).await?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod local;
pub mod locator;
pub mod logging;
pub mod remote;
pub mod retry;
pub mod transport;
pub mod vfs;

pub use error::{TransportError, VfsError};
pub use locator::ResourceLocator;
pub use remote::RemoteAccessor;
pub use vfs::{exists, path_dir_name, path_join, path_resolve, read_file, Vfs};
