use std::path::Path;

use crate::error::SourceError;
use crate::types::PaymentId;

/// Parse payment identifiers from text, one per line.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comment lines are
/// skipped. Order and duplicates are preserved: each surviving line yields
/// exactly one identifier, and the fetch run produces exactly one outcome
/// for each of them.
pub fn parse_ids_str(input: &str) -> Vec<PaymentId> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PaymentId::new)
        .collect()
}

pub fn read_ids_file(path: &Path) -> Result<Vec<PaymentId>, SourceError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_ids_str(&content))
}
