//! OAuth1 signature methods.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::{Digest, Sha1};

use crate::escape::oauth_escape;

type HmacSha1Mac = Hmac<Sha1>;

/// Errors that can occur while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The external RSA primitive failed.
    #[error("signing failed: {0}")]
    Signing(String),
}

/// An OAuth1 signature method.
pub trait SignatureMethod {
    /// The method name carried in `oauth_signature_method`.
    fn name(&self) -> &'static str;

    /// Sign the base string and return the (base64) signature.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the underlying primitive fails.
    fn sign(&self, base: &str) -> Result<String, AuthError>;
}

/// The standard OAuth1 HMAC-SHA1 method.
///
/// The HMAC key is `escape(consumer_secret)&escape(token_secret)`. In
/// private-application mode both secrets are the same consumer secret.
#[derive(Debug, Clone)]
pub struct HmacSha1 {
    key: String,
}

impl HmacSha1 {
    /// Build the method from the two secrets.
    #[must_use]
    pub fn new(consumer_secret: &str, token_secret: &str) -> Self {
        Self {
            key: format!(
                "{}&{}",
                oauth_escape(consumer_secret),
                oauth_escape(token_secret)
            ),
        }
    }
}

impl SignatureMethod for HmacSha1 {
    fn name(&self) -> &'static str {
        "HMAC-SHA1"
    }

    fn sign(&self, base: &str) -> Result<String, AuthError> {
        let mut mac = HmacSha1Mac::new_from_slice(self.key.as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(base.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

/// The RSA primitive behind [`RsaSha1`].
///
/// Implementors sign a 20-byte SHA-1 digest with the consumer's private key
/// (PKCS#1 v1.5) and return the raw signature bytes.
pub trait RsaSigner {
    /// Sign the digest with the private key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the key is unusable or signing fails.
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, AuthError>;
}

/// The RSA-SHA1 method required by Xero private applications.
///
/// The signing base is hashed with SHA-1, the digest is handed to the
/// consumer-supplied [`RsaSigner`], and the result is base64-encoded.
#[derive(Debug, Clone)]
pub struct RsaSha1<S> {
    signer: S,
}

impl<S: RsaSigner> RsaSha1<S> {
    /// Wrap an RSA primitive.
    pub fn new(signer: S) -> Self {
        Self { signer }
    }
}

impl<S: RsaSigner> SignatureMethod for RsaSha1<S> {
    fn name(&self) -> &'static str {
        "RSA-SHA1"
    }

    fn sign(&self, base: &str) -> Result<String, AuthError> {
        let digest = Sha1::digest(base.as_bytes());
        let signature = self.signer.sign_digest(&digest)?;
        Ok(BASE64.encode(signature))
    }
}
