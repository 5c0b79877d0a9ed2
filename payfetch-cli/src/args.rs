use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct TransportArgs {
    /// API token; falls back to the PAYFETCH_TOKEN environment variable.
    #[arg(long)]
    pub token: Option<String>,
    #[arg(long, default_value = "https://api.mercadopago.com/v1/payments")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[arg(long, default_value_t = 15_000)]
    pub timeout: u64,
    /// Proxy URL; falls back to HTTPS_PROXY, then HTTP_PROXY.
    #[arg(long)]
    pub proxy: Option<String>,
    /// Idle connections kept per host in each worker's pool.
    #[arg(long, default_value_t = 20)]
    pub pool_size: usize,
}

#[derive(Debug, Args, Clone)]
pub struct RetryArgs {
    /// Attempts per identifier for 429/5xx and transport failures.
    #[arg(long, default_value_t = 3)]
    pub retries: usize,
    /// Base of the exponential backoff delay, in seconds.
    #[arg(long, default_value_t = 1.2)]
    pub backoff: f64,
    /// Cap on any single retry delay, in seconds.
    #[arg(long, default_value_t = 60)]
    pub max_delay: u64,
}

#[derive(Debug, Args, Clone)]
pub struct ConcurrencyArgs {
    /// Concurrent fetch workers, each with its own connection pool.
    #[arg(long, default_value_t = 5)]
    pub workers: usize,
}
