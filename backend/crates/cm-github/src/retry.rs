//! Bounded retries for identity lookups.
//!
//! Waits grow exponentially from `initial_delay`, optionally jittered into
//! 50%-150% of the nominal value. A wait the provider asks for (`Retry-After`)
//! replaces the computed one. No single wait ever exceeds `max_delay`; when
//! the provider asks for longer than that, the lookup gives up instead of
//! retrying early.

use cm_core::IdentityError;

use std::fmt::Display;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_INITIAL_DELAY_MS: u64 = 100;
const DEFAULT_MAX_DELAY_SECS: u64 = 5;
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;
const DEFAULT_JITTER_ENABLED: bool = true;

const JITTER_FLOOR: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub initial_delay: Duration,
    /// Ceiling for any single wait, jitter and provider requests included
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_delay: Duration::from_secs(DEFAULT_MAX_DELAY_SECS),
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER_ENABLED,
        }
    }
}

/// Errors that say whether another attempt could help
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;

    /// Wait requested by the remote side before the next attempt
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl IsRetryable for IdentityError {
    fn is_retryable(&self) -> bool {
        self.is_transient()
    }

    fn retry_after(&self) -> Option<Duration> {
        IdentityError::retry_after(self)
    }
}

/// Wait schedule for one retried operation.
pub(crate) struct Backoff<'a> {
    config: &'a RetryConfig,
    nominal: Duration,
}

impl<'a> Backoff<'a> {
    pub(crate) fn new(config: &'a RetryConfig) -> Self {
        Self {
            config,
            nominal: config.initial_delay.min(config.max_delay),
        }
    }

    /// Wait before the next attempt, or `None` when the remote side asked
    /// for more than `max_delay`.
    pub(crate) fn next_delay(&mut self, requested: Option<Duration>) -> Option<Duration> {
        let delay = match requested {
            Some(wait) if wait > self.config.max_delay => return None,
            Some(wait) => wait,
            None if self.config.jitter => {
                scale(self.nominal, JITTER_FLOOR + rand::random::<f64>())
            }
            None => self.nominal,
        };

        self.nominal = scale(self.nominal, self.config.backoff_multiplier).min(self.config.max_delay);

        Some(delay.min(self.config.max_delay))
    }
}

/// `duration * factor`, saturating instead of panicking on overflow or NaN
fn scale(duration: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(duration.as_secs_f64() * factor).unwrap_or(Duration::MAX)
}

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display + IsRetryable,
{
    let mut backoff = Backoff::new(config);
    let mut attempt = 0;

    loop {
        attempt += 1;

        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !error.is_retryable() || attempt >= config.max_attempts {
            warn!("{} failed after {} attempts: {}", operation_name, attempt, error);
            return Err(error);
        }

        let Some(delay) = backoff.next_delay(error.retry_after()) else {
            warn!(
                "{} asked to wait {:?}, more than the {:?} retry ceiling: {}",
                operation_name,
                error.retry_after(),
                config.max_delay,
                error
            );
            return Err(error);
        };

        debug!(
            "{} attempt {} failed: {}. Retrying in {:?}",
            operation_name, attempt, error, delay
        );
        sleep(delay).await;
    }
}
