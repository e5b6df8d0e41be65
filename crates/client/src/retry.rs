//! Retry policy with exponential backoff.

use rand::Rng;
use std::time::Duration;

/// Configuration for retry behavior.
///
/// The default envelope matches the Perigon API wrapper contract: up to 10
/// total attempts per request, waiting 2s, 4s, 8s, ... between attempts,
/// capped at 30s per wait, without jitter.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, counting the initial request.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
    /// Whether to respect Retry-After headers.
    pub respect_retry_after: bool,
    /// Maximum time to wait from a Retry-After header.
    pub max_retry_after: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
            backoff: BackoffStrategy::Exponential { factor: 2.0 },
            respect_retry_after: true,
            max_retry_after: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Set the total number of attempts (initial request plus retries).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay between attempts.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// A config that performs the request once and never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// Constant delay between retries.
    Constant,
    /// Linear increase in delay (delay * attempt).
    Linear,
    /// Exponential increase in delay (delay * factor^attempt).
    Exponential { factor: f64 },
    /// Exponential with random jitter to avoid thundering herd.
    ExponentialWithJitter { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the delay for a given retry number (0-indexed).
    pub fn delay(&self, retry: u32, initial_delay: Duration, max_delay: Duration) -> Duration {
        let delay = match self {
            BackoffStrategy::Constant => initial_delay,
            BackoffStrategy::Linear => initial_delay * (retry + 1),
            BackoffStrategy::Exponential { factor } => {
                let multiplier = factor.powi(retry as i32);
                Duration::from_secs_f64(initial_delay.as_secs_f64() * multiplier)
            }
            BackoffStrategy::ExponentialWithJitter { factor } => {
                let base_multiplier = factor.powi(retry as i32);
                let base_delay = initial_delay.as_secs_f64() * base_multiplier;

                // Jitter: random value between 0 and base_delay
                let jitter = rand::rng().random::<f64>() * base_delay;

                Duration::from_secs_f64(base_delay + jitter)
            }
        };

        std::cmp::min(delay, max_delay)
    }
}

/// Tracks attempts for a single request and hands out backoff delays.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    failed: u32,
}

impl RetryPolicy {
    /// Create a new retry policy from config.
    pub fn new(config: RetryConfig) -> Self {
        Self { config, failed: 0 }
    }

    /// Number of failed attempts recorded so far.
    pub fn attempts(&self) -> u32 {
        self.failed
    }

    /// Record a failed attempt and return the delay before the next one.
    ///
    /// Returns `None` once the attempt budget is spent. A `Retry-After`
    /// hint takes precedence over the computed backoff when the config
    /// honors it, capped at `max_retry_after`.
    pub fn next_delay(&mut self, retry_after: Option<Duration>) -> Option<Duration> {
        self.failed += 1;
        if self.failed >= self.config.max_attempts {
            return None;
        }

        let delay = match retry_after {
            Some(hint) if self.config.respect_retry_after => {
                std::cmp::min(hint, self.config.max_retry_after)
            }
            _ => self.config.backoff.delay(
                self.failed - 1,
                self.config.initial_delay,
                self.config.max_delay,
            ),
        };

        Some(delay)
    }
}
