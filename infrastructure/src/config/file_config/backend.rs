//! Backend configuration from TOML (`[backend]` section)

use generator_application::{BackendConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the generator backend
    pub url: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl FileBackendConfig {
    /// A blank URL falls back to [`DEFAULT_BASE_URL`]
    pub fn to_backend_config(&self) -> BackendConfig {
        let url = self.url.trim();
        if url.is_empty() {
            BackendConfig::new(DEFAULT_BASE_URL)
        } else {
            BackendConfig::new(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_backend_config() {
        let file = FileBackendConfig {
            url: " http://backend:9000 ".to_string(),
        };
        assert_eq!(file.to_backend_config().base_url(), "http://backend:9000");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let file = FileBackendConfig {
            url: "  ".to_string(),
        };
        assert_eq!(file.to_backend_config().base_url(), "http://localhost:8080");
    }
}
