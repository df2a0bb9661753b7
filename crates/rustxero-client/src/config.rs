//! Client configuration.

/// Endpoint configuration for the Xero API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XeroConfig {
    /// Scheme and host, no trailing slash.
    pub base_url: String,
    /// API path prefix, with leading slash.
    pub api_path: String,
}

impl Default for XeroConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.xero.com".to_owned(),
            api_path: "/api.xro/2.0".to_owned(),
        }
    }
}

impl XeroConfig {
    /// Load configuration from environment variables, falling back to the
    /// production endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("XERO_BASE_URL") {
            config.base_url = v;
        }
        if let Ok(v) = std::env::var("XERO_API_PATH") {
            config.api_path = v;
        }

        config
    }

    /// The full API root URL.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, self.api_path)
    }
}
