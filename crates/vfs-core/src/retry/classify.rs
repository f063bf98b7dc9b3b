//! Classify HTTP statuses and transport errors for retry decisions.

use crate::error::TransportError;

/// How an existence probe treats a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200: the resource exists.
    Found,
    /// Transient server-side or proxy condition; worth another attempt.
    Retryable,
    /// Any other status: a definitive "no".
    Definitive,
}

/// Classify a HEAD response status.
pub fn classify_status(code: u32) -> StatusClass {
    match code {
        200 => StatusClass::Found,
        407 | 408 => StatusClass::Retryable,
        c if c >= 500 => StatusClass::Retryable,
        _ => StatusClass::Definitive,
    }
}

/// Coarse kind of a transport failure. Used for logging; every transport
/// failure is retried regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Operation timed out (connect/transfer).
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, etc.).
    Connection,
    /// Anything else (malformed URL, TLS, ...).
    Other,
}

/// Classify a transport error.
pub fn classify_transport_error(e: &TransportError) -> TransportKind {
    let ce = match e {
        TransportError::Curl(ce) => ce,
        TransportError::Message(_) => return TransportKind::Other,
    };
    if ce.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if ce.is_couldnt_connect()
        || ce.is_couldnt_resolve_host()
        || ce.is_couldnt_resolve_proxy()
        || ce.is_read_error()
        || ce.is_recv_error()
        || ce.is_send_error()
        || ce.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}
