use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read identifier file: {0}")]
    Io(#[from] std::io::Error),
}
