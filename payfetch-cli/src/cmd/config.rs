use std::time::Duration;

use url::Url;

use payfetch_exec::executor::ExecutorConfig;
use payfetch_exec::retry::RetryConfig;
use payfetch_exec::transport::{Token, TransportConfig};

use crate::output::print_error;
use crate::{ConcurrencyArgs, OutputArgs, RetryArgs, TransportArgs};

/// `--token` wins over the environment; a blank value counts as missing.
pub fn resolve_token(flag: Option<&str>) -> Option<Token> {
    let token = flag
        .map(str::to_string)
        .or_else(|| std::env::var("PAYFETCH_TOKEN").ok())?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(Token::new(token))
}

pub fn resolve_proxy(flag: Option<&str>) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var("HTTPS_PROXY").ok())
        .or_else(|| std::env::var("HTTP_PROXY").ok())
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

pub fn build_transport_config(
    transport: &TransportArgs,
    token: Token,
    output: &OutputArgs,
) -> Option<TransportConfig> {
    let base_url = match Url::parse(transport.base_url.trim()) {
        Ok(u) => u,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("invalid base url {}: {e}", transport.base_url),
            );
            return None;
        }
    };

    let mut config = TransportConfig::new(base_url, token);
    config.timeout = Duration::from_millis(transport.timeout);
    config.pool_size = transport.pool_size;
    config.proxy = resolve_proxy(transport.proxy.as_deref());
    Some(config)
}

pub fn build_executor_config(concurrency: &ConcurrencyArgs, retry: &RetryArgs) -> ExecutorConfig {
    ExecutorConfig {
        worker_count: concurrency.workers,
        retry: RetryConfig {
            backoff_factor: retry.backoff,
            max_attempts: retry.retries,
            max_delay: Duration::from_secs(retry.max_delay),
            ..Default::default()
        },
    }
}
