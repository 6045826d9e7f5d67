//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Log file path. Defaults to `<cache dir>/generator/generator.log`.
    pub file: Option<String>,
}

impl FileLogConfig {
    /// Resolve the log file path, if one can be determined
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match &self.file {
            Some(file) => Some(PathBuf::from(file)),
            None => dirs::cache_dir().map(|d| d.join("generator").join("generator.log")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = FileLogConfig {
            file: Some("/var/tmp/gen.log".to_string()),
        };
        assert_eq!(config.resolve_path(), Some(PathBuf::from("/var/tmp/gen.log")));
    }
}
