//! Domain layer for generator
//!
//! This crate contains the wire entities, input validation and the
//! per-action state machine. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! The page offers two independent actions:
//!
//! - **Number**: generate a random integer in a user-supplied range
//! - **Quote**: fetch a random preset quote
//!
//! Each action owns one [`ActionState`] that moves through
//! `Idle → Loading → Success | Failed` and can be restarted at any time.

pub mod action;
pub mod core;
pub mod generator;

// Re-export commonly used types
pub use action::state::{ActionPhase, ActionState, ActionView, REQUEST_FAILED};
pub use core::error::DomainError;
pub use generator::{
    entities::{NumberRequest, NumberResponse, QuoteRequest, QuoteResponse},
    range::{DEFAULT_MAX, DEFAULT_MIN, RangeInput},
};
