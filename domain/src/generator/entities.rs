//! Wire entities for the generator backend
//!
//! Every field is required: a success body that lacks one fails to
//! deserialize instead of falling back to a default.

use serde::{Deserialize, Serialize};

/// Body of `POST /GetRandomNumber`
///
/// `min <= max` is not checked here; the backend rejects inverted ranges
/// and its error text is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRequest {
    pub min: i64,
    pub max: i64,
}

impl NumberRequest {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// Success body of `POST /GetRandomNumber`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResponse {
    pub value: i64,
}

/// Body of `POST /GetRandomQuote` (always `{}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {}

/// Success body of `POST /GetRandomQuote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}
