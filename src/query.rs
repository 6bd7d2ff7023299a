//! Query string encoding
//!
//! Builds the encoded query string for a route request. Values are
//! percent-encoded (space becomes `%20`, comma `%2C`, matching what the
//! Virtual Earth API expects for address waypoints) rather than
//! form-encoded, which would emit `+` for spaces.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside RFC 3986 unreserved characters gets escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single query value
#[must_use]
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Build a query string from ordered key/value pairs
///
/// Pairs are joined with `&` and the result is prefixed with `?`. An empty
/// argument list yields the empty string, with no `?`.
#[must_use]
pub fn build_query_string<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let encoded: Vec<String> = params
        .into_iter()
        .map(|(key, value)| format!("{key}={}", encode_value(value)))
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_yield_empty_string() {
        assert_eq!(build_query_string([]), "");
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(build_query_string([("o", "json")]), "?o=json");
    }

    #[test]
    fn test_pairs_joined_in_order() {
        let query = build_query_string([("wp.0", "a"), ("wp.1", "b"), ("key", "k")]);
        assert_eq!(query, "?wp.0=a&wp.1=b&key=k");
    }

    #[test]
    fn test_spaces_and_commas_are_escaped() {
        let query = build_query_string([("wp.0", "100 N Broad St, Philadelphia")]);
        assert_eq!(query, "?wp.0=100%20N%20Broad%20St%2C%20Philadelphia");
        assert!(!query.contains('+'));
    }

    #[test]
    fn test_punctuation_round_trips() {
        let address = "1 Main St. #4B, Denver & Co / CO";
        let encoded = encode_value(address);
        let decoded = percent_encoding::percent_decode_str(&encoded)
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_value("abc-123_x.y~z"), "abc-123_x.y~z");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(encode_value("München"), "M%C3%BCnchen");
    }
}
