//! Presentation layer for generator
//!
//! This crate contains the CLI definition and the terminal page
//! (event loop, key mapping and widgets).

pub mod cli;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use tui::TuiApp;
