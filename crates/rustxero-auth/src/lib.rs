//! OAuth1 request signing for rustxero.
//!
//! The Xero API authenticates every request with an OAuth1 signature. This
//! crate implements the signing base string construction (RFC 5849 parameter
//! normalization and percent-escaping), the `Authorization` header assembly,
//! and two signature methods:
//!
//! - [`HmacSha1`]: the standard OAuth1 HMAC-SHA1 method, self-contained.
//! - [`RsaSha1`]: the RSA-SHA1 method Xero requires for private
//!   applications. The RSA primitive itself is supplied by the consumer
//!   through the [`RsaSigner`] trait; this crate computes the SHA-1 digest
//!   of the signing base and base64-encodes whatever the signer returns.
//!
//! In private-application mode the consumer key and secret double as the
//! token credentials, so no interactive authorization handshake exists here.

mod base;
mod escape;
mod header;
mod signature;

pub use base::{build_signing_base, normalize_parameters};
pub use escape::oauth_escape;
pub use header::{OAuthParams, authorization_header, sign_request};
pub use signature::{AuthError, HmacSha1, RsaSha1, RsaSigner, SignatureMethod};
