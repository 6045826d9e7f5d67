//! Generic async action.
//!
//! Both page flows share one lifecycle: validate (optional), mark loading,
//! call the gateway, then store either the rendered response or the error
//! message. [`ActionSlot`] implements that lifecycle once; an [`Action`]
//! only says which gateway call to make and how to render its response.

use crate::ports::generator_gateway::{GatewayError, GeneratorGateway};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use generator_domain::{
    ActionState, DomainError, NumberRequest, NumberResponse, QuoteRequest, QuoteResponse,
};
use std::sync::Arc;
use tracing::{info, warn};

/// One user-triggerable flow, parameterized by its request/response types.
#[async_trait]
pub trait Action: Clone + Send + Sync + 'static {
    type Request: Send + 'static;
    type Response: Send + 'static;

    /// Short name used in logs
    const NAME: &'static str;

    /// Issue the request through the gateway.
    async fn dispatch(
        &self,
        gateway: &dyn GeneratorGateway,
        request: Self::Request,
    ) -> Result<Self::Response, GatewayError>;

    /// Text stored as the result on success.
    fn render(response: &Self::Response) -> String;
}

/// Random integer in a range
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberAction;

#[async_trait]
impl Action for NumberAction {
    type Request = NumberRequest;
    type Response = NumberResponse;

    const NAME: &'static str = "number";

    async fn dispatch(
        &self,
        gateway: &dyn GeneratorGateway,
        request: NumberRequest,
    ) -> Result<NumberResponse, GatewayError> {
        gateway.get_random_number(&request).await
    }

    fn render(response: &NumberResponse) -> String {
        response.value.to_string()
    }
}

/// Random preset quote
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteAction;

#[async_trait]
impl Action for QuoteAction {
    type Request = QuoteRequest;
    type Response = QuoteResponse;

    const NAME: &'static str = "quote";

    async fn dispatch(
        &self,
        gateway: &dyn GeneratorGateway,
        _request: QuoteRequest,
    ) -> Result<QuoteResponse, GatewayError> {
        gateway.get_random_quote().await
    }

    fn render(response: &QuoteResponse) -> String {
        response.quote.clone()
    }
}

/// An action together with its state.
#[derive(Debug, Clone, Default)]
pub struct ActionSlot<A: Action> {
    action: A,
    state: ActionState,
}

impl<A: Action> ActionSlot<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            state: ActionState::new(),
        }
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Validation failed: go straight to `Failed` without a request.
    pub fn reject(&mut self, error: DomainError) {
        warn!(action = A::NAME, "Rejected before request: {}", error);
        self.state.fail(error.to_string());
    }

    /// Enter `Loading` and return the request as a detached future.
    ///
    /// The future owns everything it needs so the caller can spawn it;
    /// its output goes back through [`ActionSlot::finish`].
    pub fn start(
        &mut self,
        gateway: Arc<dyn GeneratorGateway>,
        request: A::Request,
    ) -> BoxFuture<'static, Result<A::Response, GatewayError>> {
        self.state.begin();
        info!(action = A::NAME, "Request started");

        let action = self.action.clone();
        async move { action.dispatch(gateway.as_ref(), request).await }.boxed()
    }

    /// Leave `Loading` with the request's outcome.
    pub fn finish(&mut self, result: Result<A::Response, GatewayError>) {
        match result {
            Ok(response) => {
                let text = A::render(&response);
                info!(action = A::NAME, "Request succeeded");
                self.state.succeed(text);
            }
            Err(e) => {
                warn!(action = A::NAME, "Request failed: {}", e);
                self.state.fail(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGateway;

    #[async_trait]
    impl GeneratorGateway for FixedGateway {
        async fn get_random_number(
            &self,
            request: &NumberRequest,
        ) -> Result<NumberResponse, GatewayError> {
            Ok(NumberResponse { value: request.max })
        }

        async fn get_random_quote(&self) -> Result<QuoteResponse, GatewayError> {
            Err(GatewayError::Transport(String::new()))
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(NumberAction::render(&NumberResponse { value: -3 }), "-3");
        assert_eq!(
            QuoteAction::render(&QuoteResponse {
                quote: "Stay hungry, stay foolish.".to_string()
            }),
            "Stay hungry, stay foolish."
        );
    }

    #[tokio::test]
    async fn test_slot_success() {
        let mut slot = ActionSlot::new(NumberAction);
        let request = slot.start(Arc::new(FixedGateway), NumberRequest::new(1, 9));
        assert!(slot.state().is_loading());

        slot.finish(request.await);
        assert!(!slot.state().is_loading());
        assert_eq!(slot.state().result_text(), "9");
    }

    #[tokio::test]
    async fn test_slot_empty_error_falls_back() {
        let mut slot = ActionSlot::new(QuoteAction);
        let request = slot.start(Arc::new(FixedGateway), QuoteRequest::default());
        slot.finish(request.await);
        assert_eq!(slot.state().error_text(), "Request failed");
    }

    #[test]
    fn test_slot_reject() {
        let mut slot = ActionSlot::new(NumberAction);
        slot.reject(DomainError::InvalidNumbers);
        assert!(!slot.state().is_loading());
        assert_eq!(slot.state().error_text(), "Please enter valid numbers");
    }
}
