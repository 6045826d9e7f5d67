//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `backend.url`
pub const BACKEND_URL_ENV: &str = "GENERATOR_BACKEND_URL";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["generator.toml", ".generator.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GENERATOR_BACKEND_URL` environment variable
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./generator.toml` or `./.generator.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/generator/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env()).extract().map_err(Box::new)
    }

    /// Load defaults plus the environment override (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    /// Load configuration for one run.
    ///
    /// Files are skipped when `no_config` is set. A non-blank `backend_url`
    /// from the command line beats every other source.
    pub fn resolve(
        config_path: Option<&PathBuf>,
        no_config: bool,
        backend_url: Option<&str>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut config = if no_config {
            Self::load_without_files()?
        } else {
            Self::load(config_path)?
        };

        if let Some(url) = backend_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.backend.url = url.to_string();
        }

        Ok(config)
    }

    /// A blank variable counts as unset
    fn env() -> Env {
        Env::raw()
            .only(&[BACKEND_URL_ENV])
            .filter(|_| env_backend_url().is_some())
            .map(|_| "backend.url".into())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/generator/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("generator").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if env_backend_url().is_some() {
            println!("  [FOUND] Env:     {}", BACKEND_URL_ENV);
        } else {
            println!("  [     ] Env:     {}", BACKEND_URL_ENV);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./generator.toml or ./.generator.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn env_backend_url() -> Option<String> {
    std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
