use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Event {
    RunStarted {
        run_id: Uuid,
        total: usize,
    },
    FetchStarted {
        run_id: Uuid,
        payment_id: String,
    },
    AttemptStarted {
        run_id: Uuid,
        payment_id: String,
        attempt_no: usize,
    },
    RetryScheduled {
        run_id: Uuid,
        payment_id: String,
        attempt_no: usize,
        delay_ms: u64,
    },
    FetchFinished {
        run_id: Uuid,
        payment_id: String,
        succeeded: bool,
    },
    RunFinished {
        run_id: Uuid,
        succeeded: usize,
        failed: usize,
    },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}

pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        let json = match event {
            Event::RunStarted { run_id, total } => {
                json!({ "type": "run.started", "run_id": run_id.to_string(), "total": total })
            }
            Event::FetchStarted { run_id, payment_id } => {
                json!({ "type": "fetch.started", "run_id": run_id.to_string(), "payment_id": payment_id })
            }
            Event::AttemptStarted { run_id, payment_id, attempt_no } => {
                json!({ "type": "attempt.started", "run_id": run_id.to_string(), "payment_id": payment_id, "attempt_no": attempt_no })
            }
            Event::RetryScheduled { run_id, payment_id, attempt_no, delay_ms } => {
                json!({ "type": "retry.scheduled", "run_id": run_id.to_string(), "payment_id": payment_id, "attempt_no": attempt_no, "delay_ms": delay_ms })
            }
            Event::FetchFinished { run_id, payment_id, succeeded } => {
                json!({ "type": "fetch.finished", "run_id": run_id.to_string(), "payment_id": payment_id, "succeeded": succeeded })
            }
            Event::RunFinished { run_id, succeeded, failed } => {
                json!({ "type": "run.finished", "run_id": run_id.to_string(), "succeeded": succeeded, "failed": failed })
            }
        };
        println!("{}", serde_json::to_string(&json).unwrap_or_default());
    }
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            let event_clone = event.clone();
            sink.emit(event_clone).await;
        }
    }
}
