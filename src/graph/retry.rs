//! Retry policies for node execution.
//!
//! Applied around each node run by the compiled graph; transient failures
//! (LLM or search API hiccups) can be retried with fixed or exponential
//! backoff. Default is no retry, matching propagate-on-failure semantics.

use std::time::Duration;

/// Retry policy for a failed node run.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// Fail immediately on error.
    None,
    /// Retry with a constant delay between attempts.
    Fixed {
        /// Maximum number of retry attempts.
        max_attempts: usize,
        /// Fixed interval between retries.
        interval: Duration,
    },
    /// Retry with exponentially increasing delays.
    Exponential {
        /// Maximum number of retry attempts.
        max_attempts: usize,
        /// Initial interval before the first retry.
        initial_interval: Duration,
        /// Interval cap.
        max_interval: Duration,
        /// Backoff multiplier (e.g. 2.0 doubles each time).
        multiplier: f64,
    },
}

impl RetryPolicy {
    /// No retries.
    pub fn none() -> Self {
        RetryPolicy::None
    }

    /// Fixed-interval retries.
    pub fn fixed(max_attempts: usize, interval: Duration) -> Self {
        RetryPolicy::Fixed {
            max_attempts,
            interval,
        }
    }

    /// Exponential-backoff retries.
    pub fn exponential(
        max_attempts: usize,
        initial_interval: Duration,
        max_interval: Duration,
        multiplier: f64,
    ) -> Self {
        RetryPolicy::Exponential {
            max_attempts,
            initial_interval,
            max_interval,
            multiplier,
        }
    }

    /// Whether another retry should be attempted after `attempt` failures.
    pub fn should_retry(&self, attempt: usize) -> bool {
        match self {
            RetryPolicy::None => false,
            RetryPolicy::Fixed { max_attempts, .. }
            | RetryPolicy::Exponential { max_attempts, .. } => attempt < *max_attempts,
        }
    }

    /// Delay before the retry following `attempt` failures.
    pub fn delay(&self, attempt: usize) -> Duration {
        match self {
            RetryPolicy::None => Duration::ZERO,
            RetryPolicy::Fixed { interval, .. } => *interval,
            RetryPolicy::Exponential {
                initial_interval,
                max_interval,
                multiplier,
                ..
            } => {
                let factor = multiplier.powi(attempt as i32);
                let delay = initial_interval.as_secs_f64() * factor;
                Duration::from_secs_f64(delay.min(max_interval.as_secs_f64()))
            }
        }
    }
}
