//! Parsing of coin and currency lists given on the command line.

use crate::net::LIST_SEPARATOR;

/// Splits a comma-separated list like `"bitcoin, ethereum"` into trimmed ids.
///
/// Empty entries (`"bitcoin,,ethereum"`, trailing commas) are skipped.
pub fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
