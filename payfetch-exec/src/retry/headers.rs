use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use httpdate::parse_http_date;

/// Extract a server-provided wait hint from a `Retry-After` header.
///
/// A non-negative integer value is delta seconds; an HTTP-date value is
/// converted to its distance from `now`. Anything else (negative, already
/// past, unparseable) yields `None` and the caller falls back to
/// exponential backoff.
pub fn parse_retry_after(
    headers: &BTreeMap<String, String>,
    now: SystemTime,
) -> Option<Duration> {
    let v = get_header_ci(headers, "retry-after")?;
    parse_retry_after_value(v, now)
}

fn parse_retry_after_value(v: &str, now: SystemTime) -> Option<Duration> {
    let v = v.trim();
    if let Ok(secs) = v.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let dt = parse_http_date(v).ok()?;
    dt.duration_since(now).ok()
}

fn get_header_ci<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
