//! Retry with randomized exponential backoff.
//!
//! The delay before the n-th retry is drawn uniformly from
//! `[min_delay, ceiling(n)]`, where the ceiling doubles per failure and is
//! capped at `max_delay`.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    /// A policy that never sleeps; used where retries must be immediate.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// Upper bound of the random delay after `failures` failed attempts (1-based).
    pub fn ceiling(&self, failures: u32) -> Duration {
        let exp_shift = failures.saturating_sub(1).min(30);
        let base_ms = self.min_delay.as_millis() as u64;
        let raw_ms = base_ms.max(1).saturating_mul(1u64 << exp_shift);
        Duration::from_millis(raw_ms)
            .min(self.max_delay)
            .max(self.min_delay)
    }

    /// Random delay in `[min_delay, ceiling(failures)]`.
    pub fn backoff(&self, failures: u32) -> Duration {
        let low = self.min_delay.as_millis() as u64;
        let high = self.ceiling(failures).as_millis() as u64;
        if high <= low {
            return Duration::from_millis(low);
        }
        Duration::from_millis(rand::thread_rng().gen_range(low..=high))
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, AiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AiError>>,
    {
        let mut failures = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    failures += 1;
                    if failures >= self.max_attempts {
                        return Err(AiError::RetriesExhausted {
                            attempts: failures,
                            last: Box::new(err),
                        });
                    }
                    let delay = self.backoff(failures);
                    warn!(
                        label,
                        attempt = failures,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
