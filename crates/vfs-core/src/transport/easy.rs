//! libcurl transport (curl::easy).

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::error::TransportError;
use std::time::Duration;

/// Blocking libcurl requests, run on tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    /// Connect phase timeout, separate from the per-request total timeout.
    pub connect_timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl HttpTransport for CurlTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let connect_timeout = self.connect_timeout;
        tokio::task::spawn_blocking(move || perform(&request, connect_timeout))
            .await
            .map_err(|e| TransportError::Message(format!("transfer task failed: {}", e)))?
    }
}

/// Schemes libcurl is allowed to serve. Anything else (file, ftp, ...) is a
/// transport failure, not a response.
const HTTP_SCHEMES: [&str; 2] = ["http", "https"];

fn ensure_http(url: &str) -> Result<(), TransportError> {
    let scheme = url.split_once("://").map(|(s, _)| s).unwrap_or("");
    if HTTP_SCHEMES.iter().any(|h| scheme.eq_ignore_ascii_case(h)) {
        Ok(())
    } else {
        Err(TransportError::Message(format!(
            "unsupported protocol {:?} in {}",
            scheme, url
        )))
    }
}

/// Performs the request on the current thread. Follows redirects.
fn perform(request: &HttpRequest, connect_timeout: Duration) -> Result<HttpResponse, TransportError> {
    ensure_http(&request.url)?;
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    if let Some(timeout) = request.timeout {
        easy.timeout(timeout)?;
    }
    if request.method == HttpMethod::Head {
        easy.nobody(true)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    // No HTTP status line was seen (e.g. a redirect onto a non-HTTP scheme).
    if status == 0 {
        return Err(TransportError::Message(format!(
            "no HTTP response from {}",
            request.url
        )));
    }
    tracing::debug!(method = %request.method, url = %request.url, status, "http response");

    Ok(HttpResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
