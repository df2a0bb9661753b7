//! OAuth1 signing as the transport boundary consumes it.

#[cfg(test)]
mod tests {
    use rustxero_auth::{
        AuthError, HmacSha1, RsaSha1, RsaSigner, build_signing_base, oauth_escape, sign_request,
    };

    #[test]
    fn test_should_build_a_stable_signing_base() {
        let params = vec![
            ("oauth_consumer_key".to_owned(), "ck".to_owned()),
            ("where".to_owned(), "Name==\"Acme\"".to_owned()),
        ];
        let base = build_signing_base(
            "get",
            "https://api.xero.com/api.xro/2.0/Invoices",
            &params,
        );

        // Method uppercased, URL and parameter string each escaped once.
        assert!(base.starts_with("GET&https%3A%2F%2Fapi.xero.com%2Fapi.xro%2F2.0%2FInvoices&"));
        assert!(base.contains("oauth_consumer_key%3Dck"));
        assert!(base.contains("where%3DName%253D%253D%2522Acme%2522"));
    }

    #[test]
    fn test_should_escape_everything_but_unreserved_characters() {
        assert_eq!(oauth_escape("abc-_.~XYZ019"), "abc-_.~XYZ019");
        assert_eq!(oauth_escape("a b&c=d"), "a%20b%26c%3Dd");
    }

    #[test]
    fn test_should_emit_a_complete_authorization_header() {
        let method = HmacSha1::new("consumer-secret", "consumer-secret");
        let header = sign_request(
            "GET",
            "https://api.xero.com/api.xro/2.0/Contacts",
            &[],
            "consumer-key",
            &method,
        )
        .expect("signable");

        assert!(header.starts_with("OAuth "));
        for field in [
            "oauth_consumer_key=\"consumer-key\"",
            "oauth_token=\"consumer-key\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_version=\"1.0\"",
            "oauth_timestamp=",
            "oauth_nonce=",
            "oauth_signature=",
        ] {
            assert!(header.contains(field), "missing {field} in {header}");
        }
    }

    #[test]
    fn test_should_sign_with_a_consumer_supplied_rsa_primitive() {
        struct CountingSigner;
        impl RsaSigner for CountingSigner {
            fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, AuthError> {
                assert_eq!(digest.len(), 20);
                Ok(vec![0xAB; 16])
            }
        }

        let method = RsaSha1::new(CountingSigner);
        let header = sign_request(
            "POST",
            "https://api.xero.com/api.xro/2.0/Invoices",
            &[],
            "consumer-key",
            &method,
        )
        .expect("signable");
        assert!(header.contains("oauth_signature_method=\"RSA-SHA1\""));
    }
}
