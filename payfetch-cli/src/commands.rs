use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve payment identifiers against the payments API and write one
    /// CSV row per identifier.
    Fetch {
        /// Text file with one payment identifier per line.
        infile: PathBuf,
        #[arg(long, default_value = "payments.csv")]
        outfile: PathBuf,
        /// Event stream: none or stdout (JSON lines).
        #[arg(long, default_value = "none")]
        events: String,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        transport: TransportArgs,
        #[command(flatten)]
        retry: RetryArgs,
        #[command(flatten)]
        concurrency: ConcurrencyArgs,
    },
    /// Parse an identifier file and report what a fetch run would process,
    /// without any network work.
    Inspect {
        infile: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}
