use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use payfetch_exec::executor::{Event, EventSink};

/// Prints a progress line on every 10th completion and on the final one.
pub struct ProgressEventSink {
    total: usize,
    outfile: PathBuf,
    completed: AtomicUsize,
}

impl ProgressEventSink {
    pub fn new(total: usize, outfile: &Path) -> Self {
        Self {
            total,
            outfile: outfile.to_path_buf(),
            completed: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EventSink for ProgressEventSink {
    async fn emit(&self, event: Event) {
        if let Event::FetchFinished { .. } = event {
            let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 10 == 0 || done == self.total {
                eprintln!(
                    "[{done}/{}] rows written to {}",
                    self.total,
                    self.outfile.display()
                );
            }
        }
    }
}
