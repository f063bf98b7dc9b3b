//! Retry and backoff policies for remote access.
//!
//! Reads and existence probes retry different things on different
//! schedules, so each gets its own policy type:
//!
//! - reads retry transport failures only, immediately by default;
//! - existence probes retry transport failures and transient statuses
//!   (≥500, 407, 408) on a fixed attempt-indexed schedule.

mod classify;
mod policy;

pub use classify::{classify_status, classify_transport_error, StatusClass, TransportKind};
pub use policy::{ExistsRetryPolicy, ReadRetryPolicy, RetryDecision};
