use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use payfetch_core::read_ids_file;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct InspectResult {
    identifiers: usize,
    unique: usize,
}

pub async fn inspect_cmd(infile: &Path, output: OutputArgs) -> i32 {
    let ids = match read_ids_file(infile) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &format!("{e}"));
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let unique: BTreeSet<_> = ids.iter().collect();
    let res = InspectResult {
        identifiers: ids.len(),
        unique: unique.len(),
    };

    if output.format == OutputFormat::Text && !output.quiet {
        println!(
            "{} payment ids ({} unique) in {}",
            res.identifiers,
            res.unique,
            infile.display()
        );
    } else {
        print_result(output.format, output.quiet, &res);
    }
    exit_codes::SUCCESS
}
