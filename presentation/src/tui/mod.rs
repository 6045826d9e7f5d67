//! TUI (Text User Interface) module for generator
//!
//! A single-page terminal UI using ratatui: a random number card and a
//! random quote card, driven by the application's `PageController`.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, Focus, KeyHandler};
pub use state::TuiState;
pub use widgets::{
    MainLayout, footer::FooterWidget, header::HeaderWidget, number_card::NumberCardWidget,
    quote_card::QuoteCardWidget,
};
