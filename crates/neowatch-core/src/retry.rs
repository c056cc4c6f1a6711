//! Bounded immediate retry.

use std::fmt::Display;
use std::future::Future;

use crate::config::DEFAULT_MAX_ATTEMPTS;

/// Configuration for the retry loop around a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, including the first one. Zero behaves like one.
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RetryConfig {
    pub const fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Single attempt, no retry.
    pub const fn no_retry() -> Self {
        Self { max_attempts: 1 }
    }

    /// Number of attempts the loop will actually make.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Runs `operation` until it succeeds or the attempts are used up.
    ///
    /// Attempts run back to back with no delay, and every error kind is
    /// retried the same way. On exhaustion the error of the final attempt is
    /// returned unchanged. `operation` receives the 1-based attempt number.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let attempts = self.attempts();
        let mut attempt = 1;

        loop {
            match operation(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(%label, attempt, "succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(error) if attempt < attempts => {
                    tracing::debug!(%label, attempt, attempts, %error, "attempt failed, retrying");
                    attempt += 1;
                }
                Err(error) => {
                    tracing::debug!(%label, attempts, %error, "all attempts failed");
                    return Err(error);
                }
            }
        }
    }
}
