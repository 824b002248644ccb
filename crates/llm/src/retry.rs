//! Retry with exponential backoff, independent of what is being retried.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Default total number of attempts (first try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default delay before the first retry; doubles for each following retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` below 1 is raised to 1.
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), base_delay }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Wait before retry number `retry_index + 1`: `base_delay * 2^retry_index`.
    #[must_use]
    pub fn delay_for(&self, retry_index: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry_index))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

/// Runs `op` until it succeeds or `policy.max_attempts()` attempts have failed.
///
/// Every failure is retried the same way. `op` receives the zero-based attempt
/// number. After the last attempt the last error is returned unchanged.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempt: u32 = 0;
    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 0 {
                    tracing::info!(label, attempt = attempt + 1, "succeeded after retry");
                }
                return Ok(value);
            },
            Err(e) => {
                let attempts_made = attempt + 1;
                if attempts_made >= max_attempts {
                    tracing::error!(
                        label,
                        attempts = attempts_made,
                        "failed after {attempts_made} attempts: {e}"
                    );
                    return Err(e);
                }
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    label,
                    attempt = attempts_made,
                    max_attempts,
                    ?delay,
                    "attempt failed, retrying: {e}"
                );
                tokio::time::sleep(delay).await;
                attempt = attempts_made;
            },
        }
    }
}
