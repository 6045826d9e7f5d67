//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Spinner tick used when none (or zero) is configured
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Raw TUI configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Interval of the busy spinner, in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl FileTuiConfig {
    pub fn tick_rate(&self) -> Duration {
        if self.tick_rate_ms == 0 {
            Duration::from_millis(DEFAULT_TICK_RATE_MS)
        } else {
            Duration::from_millis(self.tick_rate_ms)
        }
    }
}
