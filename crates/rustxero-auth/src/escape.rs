//! OAuth1 percent-escaping.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The set of characters that must be percent-encoded per RFC 5849.
///
/// Everything except the unreserved characters (A-Z, a-z, 0-9, `-`, `_`,
/// `.`, `~`) is encoded. Unlike generic URL encoding, `/` and `:` are NOT
/// exempt — the normalized URL and every parameter value are escaped in
/// full before entering the signing base.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escape a string per the OAuth1 rules.
#[must_use]
pub fn oauth_escape(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}
