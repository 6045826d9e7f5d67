//! Backend location.
//!
//! The base URL is resolved once at startup and handed to the client
//! constructor; nothing reads it from the environment afterwards.

use serde::{Deserialize, Serialize};

/// Base URL used when no source configures one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Root address of the generator backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The base URL exactly as configured (shown in the footer)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `/GetRandomNumber`.
    ///
    /// A trailing `/` on the base URL is dropped so the join never
    /// produces `//`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(BackendConfig::default().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_join() {
        let config = BackendConfig::new("http://example.test:9000");
        assert_eq!(
            config.endpoint("/GetRandomNumber"),
            "http://example.test:9000/GetRandomNumber"
        );
    }

    #[test]
    fn test_endpoint_join_trailing_slash() {
        let config = BackendConfig::new("http://example.test/api/");
        assert_eq!(
            config.endpoint("/GetRandomQuote"),
            "http://example.test/api/GetRandomQuote"
        );
        // Display value stays untouched
        assert_eq!(config.base_url(), "http://example.test/api/");
    }
}
