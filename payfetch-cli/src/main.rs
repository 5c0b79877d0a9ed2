use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "payfetch", version, about = "Batch payment order fetcher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Fetch {
            infile,
            outfile,
            events,
            output,
            transport,
            retry,
            concurrency,
        } => {
            cmd::fetch::fetch_cmd(
                &infile,
                &outfile,
                &events,
                output,
                transport,
                retry,
                concurrency,
            )
            .await
        }
        Command::Inspect { infile, output } => cmd::inspect::inspect_cmd(&infile, output).await,
    }
}
