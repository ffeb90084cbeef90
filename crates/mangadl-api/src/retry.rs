//! Retry with exponential backoff.
//!
//! Every outbound request goes through [`retry_with_backoff`]. The delay
//! before attempt `n` (0-based, so the first retry is attempt 1) is
//! `initial_delay * 2^n`. Only errors reporting [`Retryable::is_retryable`]
//! are retried; everything else is returned at once. When retries run out
//! the last error is returned.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Classifies an error as transient.
pub trait Retryable {
    /// Whether another attempt could succeed.
    fn is_retryable(&self) -> bool;
}

/// Backoff parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Base delay, doubled for each attempt
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 10,
            initial_delay: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Create a policy.
    pub const fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// A policy that never retries.
    pub const fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Delay to wait before `attempt` (saturating).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.initial_delay.saturating_mul(factor)
    }
}

/// Run `f` until it succeeds, fails fatally, or retries are exhausted.
///
/// `operation` names the call in the warning emitted before each retry.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut f: F,
) -> Result<T, E>
where
    E: Retryable + Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0_u32;
    loop {
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.delay_for(attempt);
                warn!(
                    operation,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    cause = %err,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
