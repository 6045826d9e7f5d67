//! Infrastructure layer for generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    BACKEND_URL_ENV, ConfigIssue, ConfigIssueCode, ConfigLoader, FileBackendConfig, FileConfig,
    FileLogConfig, FileTuiConfig,
};
pub use http::HttpGeneratorClient;
