#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl ExecutionResult {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("store error: {0}")]
    Store(#[from] payfetch_store::StoreError),
    #[error("task join error: {0}")]
    TaskJoin(String),
}
