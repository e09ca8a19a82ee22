//! Bounded exponential backoff.
//!
//! The HTTP client itself never retries failed calls (a failed operation is
//! reported and retried by user action); this machinery drives the chat
//! socket's reconnection loop.

use std::time::Duration;

/// Configuration for backoff behavior.
#[derive(Debug, Clone)]
pub struct BackoffConfig {
    /// Maximum number of attempts (None = unbounded).
    pub max_attempts: Option<u32>,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Ceiling for the delay between attempts.
    pub max_delay: Duration,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl BackoffConfig {
    #[must_use]
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = Some(max);
        self
    }

    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackoffDecision {
    Retry(Duration),
    GiveUp,
}

/// Mutable backoff state. Delays double per attempt and clamp at the
/// configured ceiling; `reset` is called after a successful reconnect.
#[derive(Debug, Clone)]
pub struct Backoff {
    pub attempts: u32,
    current_delay: Duration,
    config: BackoffConfig,
}

impl Backoff {
    pub fn new(config: BackoffConfig) -> Self {
        Self {
            attempts: 0,
            current_delay: config.initial_delay,
            config,
        }
    }

    pub fn next(&mut self) -> BackoffDecision {
        self.attempts += 1;
        if let Some(max) = self.config.max_attempts {
            if self.attempts > max {
                return BackoffDecision::GiveUp;
            }
        }

        let wait = self.current_delay;
        self.current_delay = std::cmp::min(self.current_delay * 2, self.config.max_delay);
        BackoffDecision::Retry(wait)
    }

    pub fn reset(&mut self) {
        self.attempts = 0;
        self.current_delay = self.config.initial_delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double_and_clamp() {
        let config = BackoffConfig::default()
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(4));
        let mut backoff = Backoff::new(config);

        assert_eq!(
            backoff.next(),
            BackoffDecision::Retry(Duration::from_secs(1))
        );
        assert_eq!(
            backoff.next(),
            BackoffDecision::Retry(Duration::from_secs(2))
        );
        assert_eq!(
            backoff.next(),
            BackoffDecision::Retry(Duration::from_secs(4))
        );
        // Clamped at the ceiling from here on.
        assert_eq!(
            backoff.next(),
            BackoffDecision::Retry(Duration::from_secs(4))
        );
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut backoff = Backoff::new(BackoffConfig::default().with_max_attempts(1));
        assert!(matches!(backoff.next(), BackoffDecision::Retry(_)));
        assert_eq!(backoff.next(), BackoffDecision::GiveUp);
    }

    #[test]
    fn test_reset_restores_initial_delay() {
        let mut backoff = Backoff::new(BackoffConfig::default().with_max_attempts(3));
        let first = backoff.next();
        backoff.next();
        backoff.reset();
        assert_eq!(backoff.attempts, 0);
        assert_eq!(backoff.next(), first);
    }
}
