use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Statuses treated as transient: rate limiting and server errors.
    pub retry_statuses: BTreeSet<u16>,
    /// Base of the exponential fallback delay, in seconds.
    pub backoff_factor: f64,
    pub max_delay: Duration,
    /// Total attempts per identifier, including the first.
    pub max_attempts: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retry_statuses: [429u16, 500, 502, 503, 504].into_iter().collect(),
            backoff_factor: 1.2,
            max_delay: Duration::from_secs(60),
            max_attempts: 3,
        }
    }
}
