//! Application-level configuration.
//!
//! - [`BackendConfig`]: where the generator backend lives

pub mod backend;

pub use backend::{BackendConfig, DEFAULT_BASE_URL};
