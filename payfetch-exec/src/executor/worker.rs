use std::time::SystemTime;

use uuid::Uuid;

use payfetch_core::{Outcome, PaymentId};

use crate::executor::events::{Event, EventSink};
use crate::executor::http::HttpClient;
use crate::executor::response::{extract_api_error, extract_success_fields, parse_body_json};
use crate::retry::{decide_retry, RetryConfig, RetryDecision};
use crate::transport::TransportConfig;

pub struct Worker<'a> {
    pub http: &'a dyn HttpClient,
    pub transport: &'a TransportConfig,
    pub retry: &'a RetryConfig,
    pub event_sink: &'a dyn EventSink,
}

/// Resolve one payment identifier to exactly one terminal outcome.
///
/// The backoff sleep suspends only this worker; siblings keep draining the
/// queue while it waits.
pub async fn fetch_payment(worker: &Worker<'_>, run_id: Uuid, payment_id: &PaymentId) -> Outcome {
    let url = match worker.transport.payment_url(payment_id) {
        Ok(u) => u,
        Err(e) => {
            return Outcome::transport_failure(payment_id, format!("invalid request url: {e}"))
        }
    };

    for attempt_no in 1..=worker.retry.max_attempts {
        worker
            .event_sink
            .emit(Event::AttemptStarted {
                run_id,
                payment_id: payment_id.to_string(),
                attempt_no,
            })
            .await;

        let delay = match worker.http.get(url.clone(), worker.transport.timeout).await {
            Ok(resp) => {
                let status = resp.status;
                let body = parse_body_json(&resp);

                if (200..300).contains(&status) {
                    return match body.as_ref().and_then(extract_success_fields) {
                        Some((order_id, external_reference)) => {
                            Outcome::success(payment_id, order_id, external_reference, status)
                        }
                        None => Outcome::failure(payment_id, status, "invalid response body"),
                    };
                }

                match decide_retry(
                    worker.retry,
                    attempt_no,
                    Some(status),
                    Some(&resp.headers),
                    false,
                    SystemTime::now(),
                ) {
                    RetryDecision::RetryAfter { delay, .. } => delay,
                    RetryDecision::Stop { .. } => {
                        return Outcome::failure(
                            payment_id,
                            status,
                            extract_api_error(body.as_ref(), status),
                        );
                    }
                }
            }
            Err(err) => {
                match decide_retry(
                    worker.retry,
                    attempt_no,
                    None,
                    None,
                    true,
                    SystemTime::now(),
                ) {
                    RetryDecision::RetryAfter { delay, .. } => delay,
                    RetryDecision::Stop { .. } => {
                        return Outcome::transport_failure(
                            payment_id,
                            format!("request failed: {err}"),
                        );
                    }
                }
            }
        };

        worker
            .event_sink
            .emit(Event::RetryScheduled {
                run_id,
                payment_id: payment_id.to_string(),
                attempt_no,
                delay_ms: delay.as_millis() as u64,
            })
            .await;
        tokio::time::sleep(delay).await;
    }

    // The decision table stops at max_attempts, so the loop cannot fall
    // through; this keeps the one-outcome-per-identifier invariant if it
    // ever does.
    Outcome::transport_failure(payment_id, "exhausted retries")
}
