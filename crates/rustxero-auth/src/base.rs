//! Signing base string construction.
//!
//! The OAuth1 signing base is:
//!
//! ```text
//! HTTP-METHOD & escape(normalized-URL) & escape(normalized-parameters)
//! ```
//!
//! where the normalized parameters are every oauth and query parameter,
//! individually escaped, sorted, and joined with `&`.

use crate::escape::oauth_escape;

/// Normalize request parameters for the signing base.
///
/// Each key and value is escaped, then pairs are sorted by key (and by value
/// for duplicate keys) and joined as `k=v` with `&`.
#[must_use]
pub fn normalize_parameters(params: &[(String, String)]) -> String {
    let mut escaped: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (oauth_escape(k), oauth_escape(v)))
        .collect();
    escaped.sort_unstable();

    escaped
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the OAuth1 signing base string.
///
/// `url` must be the normalized request URL: scheme and host lowercased, no
/// query string or fragment. The method is uppercased; the URL and the
/// normalized parameter string are each escaped before joining with `&`.
#[must_use]
pub fn build_signing_base(method: &str, url: &str, params: &[(String, String)]) -> String {
    let normalized = normalize_parameters(params);
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        oauth_escape(url),
        oauth_escape(&normalized)
    )
}
