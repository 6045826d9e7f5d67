//! reqwest-based generator client

use async_trait::async_trait;
use generator_application::{BackendConfig, GatewayError, GeneratorGateway};
use generator_domain::{NumberRequest, NumberResponse, QuoteRequest, QuoteResponse};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// Endpoint of the random number call
pub const PATH_GET_RANDOM_NUMBER: &str = "/GetRandomNumber";

/// Endpoint of the random quote call
pub const PATH_GET_RANDOM_QUOTE: &str = "/GetRandomQuote";

const USER_AGENT: &str = concat!("generator/", env!("CARGO_PKG_VERSION"));

/// Generator gateway backed by a pooled `reqwest::Client`
///
/// The base URL is fixed at construction; the client holds no other state.
#[derive(Debug, Clone)]
pub struct HttpGeneratorClient {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpGeneratorClient {
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn with_client(client: reqwest::Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// POST `body` as JSON to `path` and decode the success body.
    ///
    /// Non-2xx responses become [`GatewayError::Request`] carrying the body
    /// text, or `HTTP <status>` when the body is empty.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, "Request failed: {}", e);
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(%url, status = status.as_u16(), bytes = text.len(), "Response received");

        if !status.is_success() {
            let message = if text.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                text
            };
            warn!(%url, status = status.as_u16(), "Backend rejected request: {}", message);
            return Err(GatewayError::Request(message));
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[async_trait]
impl GeneratorGateway for HttpGeneratorClient {
    async fn get_random_number(
        &self,
        request: &NumberRequest,
    ) -> Result<NumberResponse, GatewayError> {
        self.post(PATH_GET_RANDOM_NUMBER, request).await
    }

    async fn get_random_quote(&self) -> Result<QuoteResponse, GatewayError> {
        self.post(PATH_GET_RANDOM_QUOTE, &QuoteRequest::default())
            .await
    }
}
