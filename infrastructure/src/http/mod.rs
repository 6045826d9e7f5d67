//! HTTP adapter for the generator backend
//!
//! Implements [`GeneratorGateway`](generator_application::GeneratorGateway)
//! on top of `reqwest`.

pub mod client;

pub use client::{HttpGeneratorClient, PATH_GET_RANDOM_NUMBER, PATH_GET_RANDOM_QUOTE};
