use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use payfetch_exec::retry::{decide_retry, RetryConfig, RetryDecision, RetryReason};

fn headers(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn retry_after_header_wins_over_backoff() {
    let cfg = RetryConfig::default();
    let h = headers(&[("Retry-After", "5")]);

    let d = decide_retry(&cfg, 1, Some(429), Some(&h), false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::RetryAfter {
            delay: Duration::from_secs(5),
            reason: RetryReason::RetryAfterHeader
        }
    );
}

#[test]
fn stops_when_attempts_exhausted() {
    let cfg = RetryConfig::default();

    let d = decide_retry(&cfg, cfg.max_attempts, Some(500), None, false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::Stop {
            reason: RetryReason::AttemptsExhausted
        }
    );
}

#[test]
fn non_retryable_status_stops_immediately() {
    let cfg = RetryConfig::default();

    let d = decide_retry(&cfg, 1, Some(404), None, false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::Stop {
            reason: RetryReason::HttpStatus(404)
        }
    );
}

#[test]
fn fallback_delay_is_backoff_factor_to_the_attempt() {
    let cfg = RetryConfig {
        backoff_factor: 2.0,
        max_attempts: 5,
        ..Default::default()
    };

    for (attempt, expected_secs) in [(1usize, 2.0f64), (2, 4.0), (3, 8.0)] {
        let d = decide_retry(&cfg, attempt, Some(503), None, false, SystemTime::UNIX_EPOCH);
        assert_eq!(
            d,
            RetryDecision::RetryAfter {
                delay: Duration::from_secs_f64(expected_secs),
                reason: RetryReason::HttpStatus(503)
            }
        );
    }
}

#[test]
fn malformed_retry_after_falls_back_to_backoff() {
    let cfg = RetryConfig {
        backoff_factor: 2.0,
        ..Default::default()
    };
    let h = headers(&[("Retry-After", "soon")]);

    let d = decide_retry(&cfg, 1, Some(429), Some(&h), false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::RetryAfter {
            delay: Duration::from_secs(2),
            reason: RetryReason::HttpStatus(429)
        }
    );
}

#[test]
fn network_failure_retries_with_backoff() {
    let cfg = RetryConfig {
        backoff_factor: 2.0,
        ..Default::default()
    };

    let d = decide_retry(&cfg, 1, None, None, true, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::RetryAfter {
            delay: Duration::from_secs(2),
            reason: RetryReason::NetworkFailure
        }
    );
}

#[test]
fn network_failure_stops_at_budget() {
    let cfg = RetryConfig::default();

    let d = decide_retry(&cfg, cfg.max_attempts, None, None, true, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::Stop {
            reason: RetryReason::AttemptsExhausted
        }
    );
}

#[test]
fn no_status_without_network_failure_is_not_retryable() {
    let cfg = RetryConfig::default();

    let d = decide_retry(&cfg, 1, None, None, false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::Stop {
            reason: RetryReason::NotRetryable
        }
    );
}

#[test]
fn header_delay_is_clamped_to_max_delay() {
    let cfg = RetryConfig::default();
    let h = headers(&[("Retry-After", "3600")]);

    let d = decide_retry(&cfg, 1, Some(429), Some(&h), false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::RetryAfter {
            delay: cfg.max_delay,
            reason: RetryReason::RetryAfterHeader
        }
    );
}

#[test]
fn fallback_delay_is_clamped_to_max_delay() {
    let cfg = RetryConfig {
        backoff_factor: 10.0,
        max_delay: Duration::from_secs(30),
        max_attempts: 10,
        ..Default::default()
    };

    let d = decide_retry(&cfg, 5, Some(503), None, false, SystemTime::UNIX_EPOCH);
    assert_eq!(
        d,
        RetryDecision::RetryAfter {
            delay: Duration::from_secs(30),
            reason: RetryReason::HttpStatus(503)
        }
    );
}
