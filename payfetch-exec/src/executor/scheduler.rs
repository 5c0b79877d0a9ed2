use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;

use payfetch_core::{Outcome, PaymentId};
use payfetch_store::OutcomeStore;

use crate::executor::events::{Event, EventSink};
use crate::executor::http::HttpClient;
use crate::executor::result::{ExecutionError, ExecutionResult};
use crate::executor::types::ExecutorConfig;
use crate::executor::worker::{fetch_payment, Worker};
use crate::retry::RetryConfig;
use crate::transport::{HttpClientFactory, TransportConfig};

pub struct Executor {
    config: ExecutorConfig,
    transport: TransportConfig,
    factory: Arc<dyn HttpClientFactory>,
    store: Arc<dyn OutcomeStore>,
    event_sink: Arc<dyn EventSink>,
}

impl Executor {
    pub fn new(
        config: ExecutorConfig,
        transport: TransportConfig,
        factory: Arc<dyn HttpClientFactory>,
        store: Arc<dyn OutcomeStore>,
        event_sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            transport,
            factory,
            store,
            event_sink,
        }
    }

    /// Fetch every identifier under bounded parallelism, appending each
    /// outcome to the store as it completes.
    ///
    /// Exactly one outcome reaches the store per input identifier, in
    /// completion order; a panicking resolution is converted into a
    /// terminal outcome rather than aborting its siblings.
    pub async fn execute_run(
        &self,
        run_id: Uuid,
        ids: Vec<PaymentId>,
    ) -> Result<ExecutionResult, ExecutionError> {
        let total = ids.len();
        self.event_sink
            .emit(Event::RunStarted { run_id, total })
            .await;

        // Pre-fill the queue and close it; workers drain until empty.
        let (work_tx, work_rx) = mpsc::channel::<PaymentId>(total.max(1));
        for id in ids {
            if work_tx.send(id).await.is_err() {
                break;
            }
        }
        drop(work_tx);
        let work_rx = Arc::new(Mutex::new(work_rx));

        let worker_count = self.config.worker_count.max(1);
        let (outcome_tx, mut outcome_rx) = mpsc::channel::<Outcome>(worker_count);

        let mut handles = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            handles.push(tokio::spawn(run_worker(
                run_id,
                work_rx.clone(),
                outcome_tx.clone(),
                self.factory.clone(),
                self.transport.clone(),
                self.config.retry.clone(),
                self.event_sink.clone(),
            )));
        }
        drop(outcome_tx);

        let mut result = ExecutionResult::default();
        while let Some(outcome) = outcome_rx.recv().await {
            let succeeded = outcome.is_success();
            let payment_id = outcome.payment_id.clone();
            self.store.append_outcome(&outcome).await?;
            if succeeded {
                result.record_success();
            } else {
                result.record_failure();
            }
            self.event_sink
                .emit(Event::FetchFinished {
                    run_id,
                    payment_id,
                    succeeded,
                })
                .await;
        }

        for handle in handles {
            handle
                .await
                .map_err(|e| ExecutionError::TaskJoin(e.to_string()))?;
        }

        self.event_sink
            .emit(Event::RunFinished {
                run_id,
                succeeded: result.succeeded,
                failed: result.failed,
            })
            .await;

        Ok(result)
    }
}

/// One long-lived worker: drains the shared queue, lazily building its own
/// client on first use and reusing it for every identifier it processes.
async fn run_worker(
    run_id: Uuid,
    work_rx: Arc<Mutex<mpsc::Receiver<PaymentId>>>,
    outcome_tx: mpsc::Sender<Outcome>,
    factory: Arc<dyn HttpClientFactory>,
    transport: TransportConfig,
    retry: RetryConfig,
    event_sink: Arc<dyn EventSink>,
) {
    let mut client: Option<Arc<dyn HttpClient>> = None;

    loop {
        let payment_id = { work_rx.lock().await.recv().await };
        let Some(payment_id) = payment_id else { break };

        event_sink
            .emit(Event::FetchStarted {
                run_id,
                payment_id: payment_id.to_string(),
            })
            .await;

        let http = match &client {
            Some(c) => c.clone(),
            None => match factory.make_client() {
                Ok(c) => {
                    client = Some(c.clone());
                    c
                }
                Err(e) => {
                    let outcome = Outcome::transport_failure(
                        &payment_id,
                        format!("client setup failed: {e}"),
                    );
                    if outcome_tx.send(outcome).await.is_err() {
                        break;
                    }
                    continue;
                }
            },
        };

        let worker = Worker {
            http: http.as_ref(),
            transport: &transport,
            retry: &retry,
            event_sink: event_sink.as_ref(),
        };

        let outcome = match std::panic::AssertUnwindSafe(fetch_payment(
            &worker,
            run_id,
            &payment_id,
        ))
        .catch_unwind()
        .await
        {
            Ok(outcome) => outcome,
            Err(panic) => Outcome::transport_failure(
                &payment_id,
                format!("worker panicked: {}", panic_message(panic.as_ref())),
            ),
        };

        if outcome_tx.send(outcome).await.is_err() {
            break;
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
