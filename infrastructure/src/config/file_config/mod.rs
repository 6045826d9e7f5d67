//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! types where appropriate.

mod backend;
mod log;
mod tui;

pub use backend::FileBackendConfig;
pub use log::FileLogConfig;
pub use tui::{DEFAULT_TICK_RATE_MS, FileTuiConfig};

use serde::{Deserialize, Serialize};

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `backend.url` has no `http://` or `https://` scheme.
    InvalidBackendUrl { value: String },
    /// `tui.tick_rate_ms` is zero.
    ZeroTickRate,
}

/// A detected issue in the configuration.
///
/// Issues never stop startup; they are reported as warnings.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend location
    pub backend: FileBackendConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Log output settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // A blank URL falls back to the default
        let url = self.backend.url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue {
                code: ConfigIssueCode::InvalidBackendUrl {
                    value: self.backend.url.clone(),
                },
                message: format!(
                    "backend.url: '{}' must start with http:// or https://",
                    self.backend.url
                ),
            });
        }

        if self.tui.tick_rate_ms == 0 {
            issues.push(ConfigIssue {
                code: ConfigIssueCode::ZeroTickRate,
                message: format!(
                    "tui.tick_rate_ms: 0 is not allowed, falling back to {}",
                    DEFAULT_TICK_RATE_MS
                ),
            });
        }

        issues
    }
}
