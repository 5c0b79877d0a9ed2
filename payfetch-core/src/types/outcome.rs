use serde::{Deserialize, Serialize};

/// Opaque token identifying one payment record at the remote API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaymentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Terminal record for one payment identifier.
///
/// Produced exactly once per identifier, after the worker's retry loop has
/// reached a terminal decision, and never mutated afterwards. The field
/// order is the CSV column order.
///
/// `http_status == 0` means the request never produced an HTTP response
/// (connect error, timeout); `error` is empty exactly when the fetch
/// succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub payment_id: String,
    pub order_id: String,
    pub external_reference: String,
    pub http_status: u16,
    pub error: String,
}

impl Outcome {
    /// Column names, in row order. Written once as the CSV header before
    /// any data row.
    pub const FIELDS: [&'static str; 5] = [
        "payment_id",
        "order_id",
        "external_reference",
        "http_status",
        "error",
    ];

    pub fn success(
        payment_id: &PaymentId,
        order_id: String,
        external_reference: String,
        http_status: u16,
    ) -> Self {
        Self {
            payment_id: payment_id.to_string(),
            order_id,
            external_reference,
            http_status,
            error: String::new(),
        }
    }

    pub fn failure(payment_id: &PaymentId, http_status: u16, error: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.to_string(),
            order_id: String::new(),
            external_reference: String::new(),
            http_status,
            error: error.into(),
        }
    }

    /// Terminal record for a request that never reached the HTTP layer.
    pub fn transport_failure(payment_id: &PaymentId, error: impl Into<String>) -> Self {
        Self::failure(payment_id, 0, error)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}
