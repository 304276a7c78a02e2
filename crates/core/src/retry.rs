//! Bounded retry for calls to unreliable external services.
//!
//! A failed attempt is retried only when the caller-supplied classifier says
//! the error is transient; any other error is returned immediately. The wait
//! between attempts is a fixed interval, not exponential.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Attempts per external call (first try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Fixed wait between a transient failure and the next attempt.
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

/// Attempt budget and backoff for [`retry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Delay after each transient failure.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

/// Run `operation` until it succeeds, fails with a non-transient error, or
/// the attempt budget is spent.
///
/// `operation` receives the 1-based attempt number. When every attempt fails
/// transiently the error from the last attempt is returned.
pub async fn retry<T, E, Op, Fut, P>(
    policy: &RetryPolicy,
    operation_name: &str,
    is_transient: P,
    mut operation: Op,
) -> Result<T, E>
where
    Op: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if !is_transient(&err) => {
                tracing::warn!(
                    operation = operation_name,
                    attempt,
                    error = %err,
                    "Non-transient failure, giving up",
                );
                return Err(err);
            }
            Err(err) if attempt >= max_attempts => {
                tracing::warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts,
                    error = %err,
                    "All attempts failed",
                );
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts,
                    error = %err,
                    "Transient failure, retrying",
                );
                tokio::time::sleep(policy.backoff).await;
                attempt += 1;
            }
        }
    }
}
