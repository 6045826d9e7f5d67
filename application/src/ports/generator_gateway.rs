//! Generator Gateway port
//!
//! Defines the interface for calling the random number / quote backend.

use async_trait::async_trait;
use generator_domain::{NumberRequest, NumberResponse, QuoteResponse};
use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// `Display` of [`GatewayError::Request`] is the server's text with nothing
/// added, because that string is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Non-2xx response; carries the response body text
    #[error("{0}")]
    Request(String),

    /// Connection refused, DNS failure, body read failure, ...
    #[error("{0}")]
    Transport(String),

    /// A success body that is not the expected JSON shape
    #[error("Invalid response: {0}")]
    Parse(String),
}

/// Gateway for the generator backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GeneratorGateway: Send + Sync {
    /// `POST /GetRandomNumber`
    async fn get_random_number(
        &self,
        request: &NumberRequest,
    ) -> Result<NumberResponse, GatewayError>;

    /// `POST /GetRandomQuote`
    async fn get_random_quote(&self) -> Result<QuoteResponse, GatewayError>;
}
