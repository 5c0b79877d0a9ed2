use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use payfetch_exec::retry::parse_retry_after;

fn headers(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn parses_delta_seconds() {
    let h = headers(&[("Retry-After", "5")]);
    let result = parse_retry_after(&h, SystemTime::now());
    assert_eq!(result, Some(Duration::from_secs(5)));
}

#[test]
fn parses_zero_seconds() {
    let h = headers(&[("Retry-After", "0")]);
    let result = parse_retry_after(&h, SystemTime::now());
    assert_eq!(result, Some(Duration::ZERO));
}

#[test]
fn parses_http_date() {
    let now = SystemTime::now();
    let future = now + Duration::from_secs(10);
    let h = headers(&[("Retry-After", &httpdate::fmt_http_date(future))]);

    let delay = parse_retry_after(&h, now).unwrap();
    assert!(delay.as_secs() >= 9 && delay.as_secs() <= 11);
}

#[test]
fn lookup_is_case_insensitive() {
    let h = headers(&[("retry-after", "3")]);
    let result = parse_retry_after(&h, SystemTime::now());
    assert_eq!(result, Some(Duration::from_secs(3)));
}

#[test]
fn missing_header_yields_none() {
    let h = headers(&[("Content-Type", "application/json")]);
    assert_eq!(parse_retry_after(&h, SystemTime::now()), None);
}

#[test]
fn unparseable_value_yields_none() {
    let h = headers(&[("Retry-After", "soon")]);
    assert_eq!(parse_retry_after(&h, SystemTime::now()), None);
}

#[test]
fn negative_value_yields_none() {
    let h = headers(&[("Retry-After", "-5")]);
    assert_eq!(parse_retry_after(&h, SystemTime::now()), None);
}

#[test]
fn http_date_in_the_past_yields_none() {
    let now = SystemTime::now();
    let past = now - Duration::from_secs(60);
    let h = headers(&[("Retry-After", &httpdate::fmt_http_date(past))]);
    assert_eq!(parse_retry_after(&h, now), None);
}
