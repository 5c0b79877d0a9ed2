use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{Writer, WriterBuilder};
use tokio::sync::Mutex;

use payfetch_core::Outcome;

use crate::store::{OutcomeStore, StoreError};

/// CSV-backed outcome store.
///
/// The header row is written and flushed at creation time, before any
/// outcome exists, so even a run interrupted before its first completion
/// leaves a well-formed file. Each append serializes one row and flushes
/// under the writer lock; rows from concurrent workers never interleave.
pub struct CsvStore {
    writer: Mutex<Writer<File>>,
    path: PathBuf,
}

impl CsvStore {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(Outcome::FIELDS)?;
        writer.flush()?;
        Ok(Self {
            writer: Mutex::new(writer),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OutcomeStore for CsvStore {
    async fn append_outcome(&self, outcome: &Outcome) -> Result<(), StoreError> {
        let mut writer = self.writer.lock().await;
        writer.serialize(outcome)?;
        writer.flush()?;
        Ok(())
    }
}
