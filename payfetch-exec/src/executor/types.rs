use crate::retry::RetryConfig;

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Concurrent fetch workers; each owns one HTTP client.
    pub worker_count: usize,
    pub retry: RetryConfig,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            worker_count: 5,
            retry: RetryConfig::default(),
        }
    }
}
