use crate::config::{ExistsConfig, ReadConfig};
use std::time::Duration;

/// Decision returned by a retry policy after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; surface the outcome of this attempt.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Retry policy for remote reads: transport failures only, fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRetryPolicy {
    /// Attempts allowed after the first one.
    pub max_retries: u32,
    /// Wait between attempts (zero = immediate retry).
    pub delay: Duration,
}

impl Default for ReadRetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::ZERO,
        }
    }
}

impl ReadRetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// `attempt` is 1-based (1 = first attempt).
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.max_attempts() {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.delay)
    }
}

impl From<&ReadConfig> for ReadRetryPolicy {
    fn from(cfg: &ReadConfig) -> Self {
        Self {
            max_retries: cfg.max_retries,
            delay: Duration::from_millis(cfg.delay_ms),
        }
    }
}

/// Retry policy for existence probes: attempt-indexed backoff schedule.
///
/// The number of retries equals the schedule length, so the default
/// `[1s, 3s, 7s]` allows four attempts in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistsRetryPolicy {
    /// Wait before retry `n` is `backoff[n - 1]`.
    pub backoff: Vec<Duration>,
    /// Per-attempt HEAD timeout.
    pub head_timeout: Duration,
}

impl Default for ExistsRetryPolicy {
    fn default() -> Self {
        Self {
            backoff: vec![
                Duration::from_millis(1000),
                Duration::from_millis(3000),
                Duration::from_millis(7000),
            ],
            head_timeout: Duration::from_secs(60),
        }
    }
}

impl ExistsRetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        u32::try_from(self.backoff.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    /// `attempt` is 1-based. The caller decides whether the failure is
    /// retryable at all; this only picks the wait.
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        let idx = attempt.saturating_sub(1) as usize;
        match self.backoff.get(idx) {
            Some(d) => RetryDecision::RetryAfter(*d),
            None => RetryDecision::NoRetry,
        }
    }
}

impl From<&ExistsConfig> for ExistsRetryPolicy {
    fn from(cfg: &ExistsConfig) -> Self {
        Self {
            backoff: cfg.backoff_ms.iter().map(|ms| Duration::from_millis(*ms)).collect(),
            head_timeout: Duration::from_secs(cfg.head_timeout_secs),
        }
    }
}
