//! Share link encoding and decoding.
//!
//! A playback is addressed as `<origin>/s/<encoded question>`. Encoding
//! escapes everything except RFC 3986 unreserved characters, so the segment
//! survives copy/paste through chat apps untouched; decoding reverses it
//! exactly once.

mod route;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

use crate::query::Query;

pub use route::Route;

/// Path prefix of playback routes.
pub const PLAYBACK_PREFIX: &str = "/s";

/// Everything but `A-Z a-z 0-9 - . _ ~` is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Errors from decoding a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link segment does not decode to UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("question is empty")]
    EmptyQuery,
}

/// Percent-encode `text` for use as a single path segment.
pub fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, SEGMENT).to_string()
}

/// Decode a path segment produced by [`encode_query`].
///
/// Malformed escapes (`%zz`) are kept literally; only a byte sequence that is
/// not UTF-8 is an error. `+` is a literal plus, not a space.
pub fn decode_segment(segment: &str) -> Result<String, LinkError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| LinkError::InvalidUtf8(segment.to_string()))
}

/// Build the shareable link for `query` under `origin`.
pub fn share_link(origin: &str, query: &Query) -> String {
    format!(
        "{}{}/{}",
        origin.trim_end_matches('/'),
        PLAYBACK_PREFIX,
        encode_query(query.as_str())
    )
}

/// Turn composer input into a question: surrounding whitespace is dropped and
/// blank input yields `None`.
pub fn compose_query(input: &str) -> Option<Query> {
    Query::new(input.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(text: &str) {
        let encoded = encode_query(text);
        assert!(!encoded.contains('/'), "segment must not contain '/': {encoded}");
        assert_eq!(decode_segment(&encoded).unwrap(), text, "encoded as {encoded}");
    }

    #[test]
    fn test_capital_of_france_link() {
        let query = Query::new("What's the capital of France?").unwrap();
        let link = share_link("https://letmechatgptthat.com", &query);
        assert_eq!(
            link,
            "https://letmechatgptthat.com/s/What%27s%20the%20capital%20of%20France%3F"
        );

        let route = Route::parse("/s/What%27s%20the%20capital%20of%20France%3F").unwrap();
        assert_eq!(route, Route::Playback(Some(query)));
    }

    #[test]
    fn test_roundtrip_reserved_and_unicode() {
        roundtrip("");
        roundtrip("plain");
        roundtrip("spaces  and\ttabs\n");
        roundtrip("a&b=c?d#e");
        roundtrip("100% sure + - . _ ~ ! * ( ) '");
        roundtrip("path/with/slashes\\and\\back");
        roundtrip("¿Dónde está la biblioteca?");
        roundtrip("日本の首都はどこですか");
        roundtrip("emoji 🙄👍🏽 and ZWJ 👨‍👩‍👧");
        roundtrip("%20 already looks encoded %zz");
    }

    #[test]
    fn test_plus_is_not_space() {
        assert_eq!(encode_query("a+b"), "a%2Bb");
        assert_eq!(decode_segment("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = decode_segment("%FF%FE").unwrap_err();
        assert_eq!(err, LinkError::InvalidUtf8("%FF%FE".to_string()));
    }

    #[test]
    fn test_malformed_escape_is_literal() {
        assert_eq!(decode_segment("50%zz").unwrap(), "50%zz");
        assert_eq!(decode_segment("trailing%").unwrap(), "trailing%");
    }

    #[test]
    fn test_share_link_trims_origin_slash() {
        let query = Query::new("hi").unwrap();
        assert_eq!(share_link("http://localhost:8080/", &query), "http://localhost:8080/s/hi");
    }

    #[test]
    fn test_compose_query_trims() {
        assert_eq!(compose_query("  hello "), Query::new("hello"));
        assert_eq!(compose_query("   "), None);
        assert_eq!(compose_query(""), None);
    }
}
