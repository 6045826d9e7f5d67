//! Configuration file loading for generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GENERATOR_BACKEND_URL` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./generator.toml` or `./.generator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, DEFAULT_TICK_RATE_MS, FileBackendConfig, FileConfig,
    FileLogConfig, FileTuiConfig,
};
pub use loader::{BACKEND_URL_ENV, ConfigLoader};
