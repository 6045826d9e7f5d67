//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for generator
#[derive(Parser, Debug)]
#[command(name = "generator")]
#[command(author, version, about = "Random number and random quote client")]
#[command(long_about = r#"
Generator is a terminal client for a random number / random quote backend.

The page has two cards:
1. Random Number: enter min and max, then Generate
2. Random Quote: Get Quote fetches a random preset quote

Keys:
  Tab / Shift+Tab   Move focus
  Enter             Activate the focused button (or submit the range)
  g / q             Generate / Get Quote (when a button is focused)
  Esc / Ctrl+C      Quit

Configuration is loaded from (in priority order):
1. --backend-url <url>                 Command-line override
2. GENERATOR_BACKEND_URL               Environment variable
3. --config <path>                     Explicit config file
4. ./generator.toml                    Project-level config
5. ~/.config/generator/config.toml     Global config

Example:
  generator
  generator --backend-url http://127.0.0.1:9000
  GENERATOR_BACKEND_URL=http://backend:8080 generator -vv
"#)]
pub struct Cli {
    /// Backend base URL (default: http://localhost:8080)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
