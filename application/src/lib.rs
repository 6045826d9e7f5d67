//! Application layer for generator
//!
//! This crate contains the interaction controller, the port it talks to,
//! and the backend configuration value. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BackendConfig, DEFAULT_BASE_URL};
pub use ports::generator_gateway::{GatewayError, GeneratorGateway};
pub use use_cases::action::{Action, ActionSlot, NumberAction, QuoteAction};
pub use use_cases::page_controller::{Completion, PageController};
