use std::sync::Arc;
use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

use payfetch_core::PaymentId;

use crate::executor::http::{HttpClient, HttpError, ReqwestHttpClient};

/// Bearer token that is not `Debug`-printable and is zeroized on drop.
#[derive(Clone)]
pub struct Token(Arc<Zeroizing<String>>);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::new(Zeroizing::new(token.into())))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Connection settings shared by every worker's client.
///
/// The config itself is cheaply cloneable and immutable; the clients built
/// from it are not shared — each worker owns exactly one.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    pub token: Token,
    pub proxy: Option<String>,
    pub timeout: Duration,
    /// Idle connections kept per host in one worker's pool.
    pub pool_size: usize,
}

impl TransportConfig {
    pub fn new(base_url: Url, token: Token) -> Self {
        Self {
            base_url,
            token,
            proxy: None,
            timeout: Duration::from_secs(15),
            pool_size: 20,
        }
    }

    /// URL of one payment resource: `{base_url}/{id}`, with the identifier
    /// percent-encoded.
    pub fn payment_url(&self, id: &PaymentId) -> Result<Url, url::ParseError> {
        let encoded = urlencoding::encode(id.as_str());
        let mut s = self.base_url.as_str().trim_end_matches('/').to_string();
        s.push('/');
        s.push_str(&encoded);
        Url::parse(&s)
    }
}

/// Builds HTTP clients for dispatch workers.
///
/// Each worker calls `make_client` lazily on first use and keeps the
/// result for its whole life, so connection pools are reused within a
/// worker but never contended across workers.
pub trait HttpClientFactory: Send + Sync {
    fn make_client(&self) -> Result<Arc<dyn HttpClient>, HttpError>;
}

pub struct ReqwestClientFactory {
    config: TransportConfig,
}

impl ReqwestClientFactory {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl HttpClientFactory for ReqwestClientFactory {
    fn make_client(&self) -> Result<Arc<dyn HttpClient>, HttpError> {
        Ok(Arc::new(ReqwestHttpClient::connect(&self.config)?))
    }
}
