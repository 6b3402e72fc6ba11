use std::time::Duration;

use crate::Error;

/// Base backoff delay; doubles with each retry.
const BACKOFF_BASE_MS: u64 = 100;

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry,
    Fail,
}

/// Retry decision engine for the request executor.
///
/// Deliberately tiny and deterministic so the policy is auditable in
/// isolation from any network: classification comes from the error value,
/// backoff is pure exponential with no jitter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Delay inserted before attempt `attempt` (1-based for retries):
    /// 100ms, 200ms, 400ms, 800ms, ...
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u64::MAX);
        Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(factor))
    }

    /// Classify an attempt failure. Transport faults and 5xx responses are
    /// transient; everything else fails the call immediately.
    pub fn decide(&self, err: &Error) -> Decision {
        if err.is_retryable() {
            Decision::Retry
        } else {
            Decision::Fail
        }
    }
}
