//! CLI entrypoint for generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use generator_application::PageController;
use generator_infrastructure::{ConfigLoader, FileConfig, HttpGeneratorClient};
use generator_presentation::{Cli, TuiApp};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigLoader::resolve(
        cli.config.as_ref(),
        cli.no_config,
        cli.backend_url.as_deref(),
    )
    .context("Failed to load configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("Effective configuration:");
        println!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to render configuration")?
        );
        return Ok(());
    }

    // Logs go to a file; the TUI owns the terminal
    let log_path = cli.log_file.clone().or_else(|| config.log.resolve_path());
    let _log_guard = init_logging(cli.verbose, log_path)?;

    info!("Starting generator");
    report_config_issues(&config);

    // === Dependency Injection ===
    let backend = config.backend.to_backend_config();
    let client = HttpGeneratorClient::new(backend.clone()).context("Failed to build HTTP client")?;
    let page = PageController::new(Arc::new(client));

    let mut app = TuiApp::new(page, backend.base_url()).with_tick_rate(config.tui.tick_rate());
    app.run().await.context("Terminal UI failed")?;

    Ok(())
}

/// Default filter directive for a `-v` count
fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Install the file subscriber. `RUST_LOG` overrides the `-v` count.
///
/// Without a resolvable path logging stays disabled.
fn init_logging(verbose: u8, path: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        warn!("Config: {}", issue.message);
    }
}
