//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generator_gateway;
