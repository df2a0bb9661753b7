//! Status classification through the full client path.

#[cfg(test)]
mod tests {
    use rustxero_client::{Error, ResponseEnvelope, Xero};

    use crate::{ScriptedTransport, init_tracing};

    fn failing_client(status: u16, body: &str) -> Xero<ScriptedTransport> {
        init_tracing();
        Xero::new(ScriptedTransport::replying(vec![ResponseEnvelope::new(
            status,
            "text/html; charset=utf-8",
            body,
        )]))
    }

    #[test]
    fn test_should_surface_not_found_with_status_and_body() {
        let client = failing_client(404, "Not found");
        let err = client.invoices().get("missing").expect_err("404");
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("Not found"));
    }

    #[test]
    fn test_should_surface_server_errors() {
        let client = failing_client(500, "boom");
        let err = client.contacts().all().expect_err("500");
        assert!(matches!(err, Error::ServerError { .. }));
    }

    #[test]
    fn test_should_treat_both_400_and_401_as_bad_requests() {
        for status in [400_u16, 401] {
            let client = failing_client(status, "rejected");
            let err = client.payments().all().expect_err("4xx");
            assert!(matches!(err, Error::BadRequest { .. }), "status {status}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_should_surface_not_implemented() {
        let client = failing_client(501, "nope");
        let err = client.currencies().all().expect_err("501");
        assert!(matches!(err, Error::NotImplemented { .. }));
    }

    #[test]
    fn test_should_fall_back_to_unknown_for_other_statuses() {
        let client = failing_client(418, "teapot");
        let err = client.accounts().all().expect_err("418");
        assert!(matches!(err, Error::Unknown { .. }));
        assert_eq!(err.body(), Some("teapot"));
    }

    #[test]
    fn test_should_report_malformed_xml_as_a_parse_error() {
        init_tracing();
        let client = Xero::new(ScriptedTransport::replying(vec![ResponseEnvelope::new(
            200,
            "text/xml; charset=utf-8",
            "this is not xml <",
        )]));
        let err = client.invoices().all().expect_err("parse failure");
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("this is not xml <"));
    }

    #[test]
    fn test_should_surface_transport_failures() {
        init_tracing();
        // An exhausted script stands in for a transport-level failure.
        let client = Xero::new(ScriptedTransport::replying(vec![]));
        let err = client.invoices().all().expect_err("transport failure");
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
