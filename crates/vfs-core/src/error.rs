//! Error types surfaced by the facade and the remote accessor.

use std::path::PathBuf;

/// Failure of the HTTP call itself (no response was obtained).
/// Kept separate from status failures so retry loops can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Transport failed for a reason not backed by libcurl (unsupported
    /// scheme, no HTTP status, worker task failure).
    #[error("{0}")]
    Message(String),
}

/// Errors returned by `read_file` and `exists`.
#[derive(Debug, thiserror::Error)]
pub enum VfsError {
    /// Local filesystem failure, propagated as-is.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote read got a well-formed response with a status other than 200.
    #[error("GET {url} returned StatusCode: \"{status}\", ResponseBody: \"{body}\"")]
    Status {
        url: String,
        status: u32,
        body: String,
    },

    /// Remote read failed at the transport level on every attempt.
    #[error("request to {url} failed after {attempts} attempts: {source}")]
    ReadExhausted {
        url: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },

    /// Existence probe failed at the transport level on every attempt.
    #[error("HEAD {url} failed after {attempts} attempts: {source}")]
    ExistsExhausted {
        url: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },
}

impl VfsError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u32> {
        match self {
            VfsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
