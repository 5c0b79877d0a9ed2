use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use payfetch_core::read_ids_file;
use payfetch_exec::executor::{
    CompositeEventSink, EventSink, Executor, NoOpEventSink, StdoutEventSink,
};
use payfetch_exec::transport::ReqwestClientFactory;
use payfetch_store::CsvStore;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::utils::redact_url_password;
use crate::{ConcurrencyArgs, OutputArgs, RetryArgs, TransportArgs};

use super::config::{build_executor_config, build_transport_config, resolve_token};
use super::progress::ProgressEventSink;

#[derive(Serialize)]
struct FetchResult {
    run_id: String,
    processed: usize,
    succeeded: usize,
    failed: usize,
    outfile: String,
}

pub async fn fetch_cmd(
    infile: &Path,
    outfile: &Path,
    events: &str,
    output: OutputArgs,
    transport: TransportArgs,
    retry: RetryArgs,
    concurrency: ConcurrencyArgs,
) -> i32 {
    // Configuration errors are fatal and must surface before any fetch.
    let token = match resolve_token(transport.token.as_deref()) {
        Some(t) => t,
        None => {
            print_error(
                output.format,
                output.quiet,
                "provide a token with --token or set PAYFETCH_TOKEN",
            );
            return exit_codes::CONFIG_ERROR;
        }
    };

    let transport_config = match build_transport_config(&transport, token, &output) {
        Some(c) => c,
        None => return exit_codes::CONFIG_ERROR,
    };

    let base_sink: Box<dyn EventSink> = match events {
        "none" => Box::new(NoOpEventSink),
        "stdout" => Box::new(StdoutEventSink),
        _ => {
            print_error(
                output.format,
                output.quiet,
                &format!("unknown event sink: {events}"),
            );
            return exit_codes::CONFIG_ERROR;
        }
    };

    let ids = match read_ids_file(infile) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &format!("{e}"));
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let total = ids.len();
    let show_text = output.format == OutputFormat::Text && !output.quiet;
    if total == 0 {
        if show_text {
            println!("no payment ids found in {}", infile.display());
        } else {
            print_result(
                output.format,
                output.quiet,
                &FetchResult {
                    run_id: String::new(),
                    processed: 0,
                    succeeded: 0,
                    failed: 0,
                    outfile: outfile.display().to_string(),
                },
            );
        }
        return exit_codes::SUCCESS;
    }

    if show_text {
        if let Some(proxy) = &transport_config.proxy {
            eprintln!("using proxy {}", redact_url_password(proxy));
        }
    }

    let store = match CsvStore::create(outfile) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to create {}: {e}", outfile.display()),
            );
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let event_sink: Arc<dyn EventSink> = if show_text {
        let mut composite = CompositeEventSink::new();
        composite.add(Box::new(ProgressEventSink::new(total, outfile)));
        composite.add(base_sink);
        Arc::new(composite)
    } else {
        Arc::from(base_sink)
    };

    let factory = Arc::new(ReqwestClientFactory::new(transport_config.clone()));
    let executor = Executor::new(
        build_executor_config(&concurrency, &retry),
        transport_config,
        factory,
        store,
        event_sink,
    );

    let run_id = Uuid::new_v4();
    match executor.execute_run(run_id, ids).await {
        Ok(result) => {
            let res = FetchResult {
                run_id: run_id.to_string(),
                processed: result.total(),
                succeeded: result.succeeded,
                failed: result.failed,
                outfile: outfile.display().to_string(),
            };
            if show_text {
                println!(
                    "Done. Processed {} payment ids. Output: {}",
                    res.processed, res.outfile
                );
                println!("  Succeeded: {}", res.succeeded);
                println!("  Failed: {}", res.failed);
            } else {
                print_result(output.format, output.quiet, &res);
            }
            if res.failed > 0 {
                exit_codes::RUN_FAILED
            } else {
                exit_codes::SUCCESS
            }
        }
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("run {run_id} failed: {e}"),
            );
            exit_codes::RUNTIME_ERROR
        }
    }
}
