use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use crate::retry::config::RetryConfig;
use crate::retry::headers::parse_retry_after;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter { delay: Duration, reason: RetryReason },
    Stop { reason: RetryReason },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReason {
    NotRetryable,
    AttemptsExhausted,
    HttpStatus(u16),
    NetworkFailure,
    RetryAfterHeader,
}

/// Decide if we should retry and how long to wait.
///
/// - `attempt_no`: 1-based attempt number for this identifier.
/// - `http_status`: status code if a response was received.
/// - `response_headers`: headers if available (for the rate-limit hint).
/// - `network_failed`: if true, the request never produced a response.
/// - `now`: time source for parsing HTTP-date retry-after.
///
/// The `Retry-After` header wins over the exponential fallback; both are
/// clamped to `cfg.max_delay`. The fallback is `backoff_factor^attempt_no`
/// seconds, deterministic per attempt.
pub fn decide_retry(
    cfg: &RetryConfig,
    attempt_no: usize,
    http_status: Option<u16>,
    response_headers: Option<&BTreeMap<String, String>>,
    network_failed: bool,
    now: SystemTime,
) -> RetryDecision {
    if attempt_no >= cfg.max_attempts {
        return RetryDecision::Stop {
            reason: RetryReason::AttemptsExhausted,
        };
    }

    if let Some(status) = http_status {
        if !cfg.retry_statuses.contains(&status) {
            return RetryDecision::Stop {
                reason: RetryReason::HttpStatus(status),
            };
        }
    } else if !network_failed {
        return RetryDecision::Stop {
            reason: RetryReason::NotRetryable,
        };
    }

    if let Some(h) = response_headers {
        if let Some(delay) = parse_retry_after(h, now) {
            return RetryDecision::RetryAfter {
                delay: clamp(delay, cfg.max_delay),
                reason: RetryReason::RetryAfterHeader,
            };
        }
    }

    let raw_secs = cfg.backoff_factor.powi(attempt_no as i32);
    let secs = raw_secs.min(cfg.max_delay.as_secs_f64()).max(0.0);
    RetryDecision::RetryAfter {
        delay: Duration::from_secs_f64(secs),
        reason: http_status
            .map(RetryReason::HttpStatus)
            .unwrap_or(RetryReason::NetworkFailure),
    }
}

fn clamp(delay: Duration, max: Duration) -> Duration {
    if delay > max {
        max
    } else {
        delay
    }
}
