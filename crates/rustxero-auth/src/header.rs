//! OAuth parameter generation and `Authorization` header assembly.

use tracing::debug;

use crate::base::build_signing_base;
use crate::escape::oauth_escape;
use crate::signature::{AuthError, SignatureMethod};

/// The oauth protocol parameters for one request.
///
/// Private-application mode: the consumer key is also the token.
#[derive(Debug, Clone)]
pub struct OAuthParams {
    /// The consumer key, doubling as `oauth_token`.
    pub consumer_key: String,
    /// The signature method name (`RSA-SHA1` / `HMAC-SHA1`).
    pub signature_method: String,
    /// Unix timestamp.
    pub timestamp: String,
    /// Unique per-request nonce.
    pub nonce: String,
}

impl OAuthParams {
    /// Build the parameters for a fresh request: current timestamp, random
    /// nonce.
    #[must_use]
    pub fn new(consumer_key: &str, signature_method: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_owned(),
            signature_method: signature_method.to_owned(),
            timestamp: chrono::Utc::now().timestamp().to_string(),
            nonce: uuid::Uuid::new_v4().simple().to_string(),
        }
    }

    /// The `oauth_*` protocol parameters as key/value pairs, for inclusion
    /// in the signing base.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("oauth_consumer_key".to_owned(), self.consumer_key.clone()),
            ("oauth_token".to_owned(), self.consumer_key.clone()),
            (
                "oauth_signature_method".to_owned(),
                self.signature_method.clone(),
            ),
            ("oauth_timestamp".to_owned(), self.timestamp.clone()),
            ("oauth_nonce".to_owned(), self.nonce.clone()),
            ("oauth_version".to_owned(), "1.0".to_owned()),
        ]
    }
}

/// Assemble the `Authorization` header value from the oauth parameters and a
/// computed signature.
#[must_use]
pub fn authorization_header(params: &OAuthParams, signature: &str) -> String {
    let mut fields: Vec<(String, String)> = params.to_pairs();
    fields.push(("oauth_signature".to_owned(), signature.to_owned()));

    let rendered: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("{k}=\"{}\"", oauth_escape(v)))
        .collect();

    format!("OAuth {}", rendered.join(", "))
}

/// Sign one request and return the full `Authorization` header value.
///
/// `url` is the normalized request URL (no query string); `query_params` are
/// the request's query parameters, which enter the signing base alongside
/// the oauth protocol parameters.
///
/// # Errors
///
/// Returns [`AuthError`] if the signature method fails.
pub fn sign_request(
    method: &str,
    url: &str,
    query_params: &[(String, String)],
    consumer_key: &str,
    signature_method: &dyn SignatureMethod,
) -> Result<String, AuthError> {
    let oauth = OAuthParams::new(consumer_key, signature_method.name());

    let mut params = oauth.to_pairs();
    params.extend_from_slice(query_params);

    let base = build_signing_base(method, url, &params);
    debug!(method, url, "built OAuth1 signing base");

    let signature = signature_method.sign(&base)?;
    Ok(authorization_header(&oauth, &signature))
}
