use async_trait::async_trait;

use payfetch_core::Outcome;

/// Durable sink for fetch outcomes.
///
/// Implementations must serialize concurrent `append_outcome` calls so no
/// two rows interleave, must not reorder or drop rows, and must make each
/// appended row durable before returning, so that a crash mid-run leaves
/// every already-appended row intact.
#[async_trait]
pub trait OutcomeStore: Send + Sync {
    async fn append_outcome(&self, outcome: &Outcome) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
