//! API constants and small URL helpers shared by the client and its tests.
use std::borrow::Borrow;

/// Root of the CoinGecko public REST API (v3).
pub const API_ROOT_URL: &str = "https://api.coingecko.com/api/v3";

/// Separator used both on the command line and in API query parameters.
pub const LIST_SEPARATOR: &str = ",";

/// Joins identifiers into a single query parameter value like `"bitcoin,ethereum"`.
///
/// Identifiers are expected to be URL-safe tokens already; nothing is encoded.
pub fn join_ids<S: Borrow<str>>(ids: &[S]) -> String {
    ids.join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_commas_in_order() {
        let ids = vec!["bitcoin", "ethereum", "cardano"];
        assert_eq!(join_ids(&ids), "bitcoin,ethereum,cardano");
    }

    #[test]
    fn single_id_has_no_separator() {
        let ids = vec![String::from("bitcoin")];
        assert_eq!(join_ids(&ids), "bitcoin");
    }

    #[test]
    fn empty_list_joins_to_empty_string() {
        let ids: Vec<String> = Vec::new();
        assert_eq!(join_ids(&ids), "");
    }
}
