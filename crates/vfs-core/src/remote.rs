//! Retrying GET/HEAD against remote resources.
//!
//! `read` retries transport failures only; a response with a bad status is
//! final. `exists` also retries transient statuses, on a fixed backoff
//! schedule. When every probe attempt ends in a retryable status `exists`
//! answers `false`, but when the last attempt is a transport failure it
//! returns an error.

use crate::config::VfsConfig;
use crate::error::{TransportError, VfsError};
use crate::retry::{
    classify_status, classify_transport_error, ExistsRetryPolicy, ReadRetryPolicy,
    RetryDecision, StatusClass,
};
use crate::transport::{CurlTransport, HttpRequest, HttpTransport};

/// Issues remote requests through `T` under the read and exists policies.
#[derive(Debug, Clone, Default)]
pub struct RemoteAccessor<T = CurlTransport> {
    transport: T,
    read_policy: ReadRetryPolicy,
    exists_policy: ExistsRetryPolicy,
}

impl RemoteAccessor<CurlTransport> {
    /// libcurl transport with policies taken from `cfg`.
    pub fn from_config(cfg: &VfsConfig) -> Self {
        Self::new(CurlTransport::default())
            .with_read_policy(ReadRetryPolicy::from(&cfg.read))
            .with_exists_policy(ExistsRetryPolicy::from(&cfg.exists))
    }
}

impl<T: HttpTransport> RemoteAccessor<T> {
    /// Accessor with the default policies.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            read_policy: ReadRetryPolicy::default(),
            exists_policy: ExistsRetryPolicy::default(),
        }
    }

    pub fn with_read_policy(mut self, policy: ReadRetryPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn with_exists_policy(mut self, policy: ExistsRetryPolicy) -> Self {
        self.exists_policy = policy;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GETs `url` and returns the body of a 200 response.
    pub async fn read(&self, url: &str) -> Result<String, VfsError> {
        let mut attempt = 1u32;
        loop {
            tracing::debug!(url, attempt, "GET");
            let err = match self.transport.request(HttpRequest::get(url)).await {
                Ok(resp) if resp.status == 200 => return Ok(resp.body),
                Ok(resp) => {
                    return Err(VfsError::Status {
                        url: url.to_string(),
                        status: resp.status,
                        body: resp.body,
                    })
                }
                Err(e) => e,
            };
            tracing::warn!(
                url,
                attempt,
                kind = ?classify_transport_error(&err),
                "GET failed: {}",
                err
            );
            match self.read_policy.decide(attempt) {
                RetryDecision::NoRetry => {
                    return Err(VfsError::ReadExhausted {
                        url: url.to_string(),
                        attempts: attempt,
                        source: err,
                    })
                }
                RetryDecision::RetryAfter(d) => {
                    if !d.is_zero() {
                        tokio::time::sleep(d).await;
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// HEADs `url`; `true` on 200, `false` on a definitive status or when
    /// retryable statuses outlast the schedule.
    pub async fn exists(&self, url: &str) -> Result<bool, VfsError> {
        let policy = &self.exists_policy;
        let mut attempt = 1u32;
        loop {
            tracing::debug!(url, attempt, "HEAD");
            let request = HttpRequest::head(url, policy.head_timeout);
            // Ok(status) = retryable status, Err = transport failure.
            let failure: Result<u32, TransportError> = match self.transport.request(request).await {
                Ok(resp) => match classify_status(resp.status) {
                    StatusClass::Found => return Ok(true),
                    StatusClass::Definitive => {
                        tracing::debug!(url, status = resp.status, "not found");
                        return Ok(false);
                    }
                    StatusClass::Retryable => Ok(resp.status),
                },
                Err(e) => Err(e),
            };

            match policy.decide(attempt) {
                RetryDecision::RetryAfter(d) => {
                    match &failure {
                        Ok(status) => {
                            tracing::warn!(url, attempt, status, "retryable status; retrying in {:?}", d)
                        }
                        Err(e) => tracing::warn!(
                            url,
                            attempt,
                            kind = ?classify_transport_error(e),
                            "HEAD failed: {}; retrying in {:?}",
                            e,
                            d
                        ),
                    }
                    tokio::time::sleep(d).await;
                    attempt += 1;
                }
                RetryDecision::NoRetry => {
                    return match failure {
                        Ok(status) => {
                            tracing::warn!(
                                url,
                                attempts = attempt,
                                status,
                                "retries exhausted; treating as missing"
                            );
                            Ok(false)
                        }
                        Err(source) => Err(VfsError::ExistsExhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            source,
                        }),
                    };
                }
            }
        }
    }
}
