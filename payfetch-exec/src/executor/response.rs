use serde_json::Value as JsonValue;

use crate::executor::http::HttpResponseParts;

pub fn parse_body_json(resp: &HttpResponseParts) -> Option<JsonValue> {
    let s = std::str::from_utf8(&resp.body).ok()?;
    serde_json::from_str(s).ok()
}

/// Success-path extraction. The body must be a JSON mapping; `order.id`
/// becomes the order reference and the top-level `external_reference`
/// becomes the external reference, both stringified and empty when absent.
pub fn extract_success_fields(body: &JsonValue) -> Option<(String, String)> {
    let map = body.as_object()?;
    let order_id = map
        .get("order")
        .and_then(JsonValue::as_object)
        .and_then(|order| order.get("id"))
        .map(stringify)
        .unwrap_or_default();
    let external_reference = map
        .get("external_reference")
        .map(stringify)
        .unwrap_or_default();
    Some((order_id, external_reference))
}

/// Terminal non-success: surface an API-supplied message when the body
/// carries one, otherwise fall back to the generic status line.
pub fn extract_api_error(body: Option<&JsonValue>, status: u16) -> String {
    if let Some(map) = body.and_then(JsonValue::as_object) {
        for key in ["message", "error", "cause"] {
            if let Some(v) = map.get(key) {
                let msg = stringify(v);
                if !msg.is_empty() {
                    return msg;
                }
            }
        }
    }
    format!("HTTP {status}")
}

fn stringify(v: &JsonValue) -> String {
    match v {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
