use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// Bounded retry with exponential backoff.
///
/// After failed attempt `i` (0-based) the policy waits `base_delay * 2^i`
/// before trying again, so the default policy waits 1s then 2s. The error of
/// the final attempt is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempts,
            base_delay,
        }
    }

    /// A single attempt, no retry.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay after failed attempt `attempt` (0-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempts are exhausted.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < attempts => {
                    let delay = self.delay(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failure() -> ClientError {
        ClientError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        }
    }

    #[test]
    fn delays_double() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(0), Duration::from_secs(1));
        assert_eq!(policy.delay(1), Duration::from_secs(2));
        assert_eq!(policy.delay(2), Duration::from_secs(4));
        assert_eq!(policy.delay(40), Duration::from_secs(u64::from(u32::MAX)));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let calls = Cell::new(0);
        let result = RetryPolicy::default()
            .run(|| {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err(failure())
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_attempts() {
        let calls = Cell::new(0);
        let start = tokio::time::Instant::now();
        let result: Result<(), _> = RetryPolicy::default()
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(failure()) }
            })
            .await;
        assert_eq!(result.unwrap_err().status(), Some(503));
        assert_eq!(calls.get(), 3);
        let waited = start.elapsed();
        assert!(waited >= Duration::from_secs(3) && waited < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn does_not_retry_validation_errors() {
        let calls = Cell::new(0);
        let result: Result<(), _> = RetryPolicy::default()
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(ClientError::Decode("bad".into())) }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn none_makes_one_attempt() {
        let calls = Cell::new(0);
        let _: Result<(), _> = RetryPolicy::none()
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(failure()) }
            })
            .await;
        assert_eq!(calls.get(), 1);
    }
}
