//! HTTP transport seam.
//!
//! The remote accessor only needs "send this method to this URL, give me the
//! status and body". `CurlTransport` does that with libcurl; tests swap in
//! scripted transports.

mod easy;

use crate::error::TransportError;
use std::fmt;
use std::future::Future;
use std::time::Duration;

pub use easy::CurlTransport;

/// Request methods the accessor issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Head => write!(f, "HEAD"),
        }
    }
}

/// A single request. `timeout` bounds the whole transfer when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: HttpMethod::Get,
            timeout: None,
        }
    }

    pub fn head(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            method: HttpMethod::Head,
            timeout: Some(timeout),
        }
    }
}

/// A response that made it back over the wire, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: String,
}

/// Sends one request. Returns `Err` only when no response was obtained
/// (connection refused, DNS failure, timeout); any status is `Ok`.
pub trait HttpTransport: Send + Sync {
    fn request(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
