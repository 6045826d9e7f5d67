//! Page controller.
//!
//! Owns all interaction state of the page: the range input text and one
//! [`ActionSlot`] per flow. The two slots never touch each other.
//!
//! Requests are split into `start_*` (synchronous state transition that
//! returns a detached future) and [`PageController::finish`] (applies the
//! resolved [`Completion`]). An event loop can therefore spawn the future
//! and keep rendering while the request is outstanding, and still mutate
//! state from a single place.

use super::action::{ActionSlot, NumberAction, QuoteAction};
use crate::ports::generator_gateway::{GatewayError, GeneratorGateway};
use futures::future::{BoxFuture, FutureExt};
use generator_domain::{ActionState, NumberResponse, QuoteRequest, QuoteResponse, RangeInput};
use std::sync::Arc;
use tracing::debug;

/// The resolved outcome of one request, routed back to its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Number(Result<NumberResponse, GatewayError>),
    Quote(Result<QuoteResponse, GatewayError>),
}

/// Controller for the number and quote cards
pub struct PageController {
    gateway: Arc<dyn GeneratorGateway>,
    range: RangeInput,
    number: ActionSlot<NumberAction>,
    quote: ActionSlot<QuoteAction>,
}

impl PageController {
    pub fn new(gateway: Arc<dyn GeneratorGateway>) -> Self {
        Self {
            gateway,
            range: RangeInput::default(),
            number: ActionSlot::new(NumberAction),
            quote: ActionSlot::new(QuoteAction),
        }
    }

    // ==================== Range input ====================

    pub fn range(&self) -> &RangeInput {
        &self.range
    }

    pub fn range_mut(&mut self) -> &mut RangeInput {
        &mut self.range
    }

    pub fn set_min(&mut self, text: impl Into<String>) {
        self.range.set_min(text);
    }

    pub fn set_max(&mut self, text: impl Into<String>) {
        self.range.set_max(text);
    }

    /// Numeric-validity gate of the range input
    pub fn can_generate(&self) -> bool {
        self.range.is_valid()
    }

    // ==================== State access ====================

    pub fn number(&self) -> &ActionState {
        self.number.state()
    }

    pub fn quote(&self) -> &ActionState {
        self.quote.state()
    }

    /// Whether the Generate control accepts activation
    pub fn number_enabled(&self) -> bool {
        self.can_generate() && !self.number().is_loading()
    }

    /// Whether the Get Quote control accepts activation
    pub fn quote_enabled(&self) -> bool {
        !self.quote().is_loading()
    }

    // ==================== Actions ====================

    /// Start the number action.
    ///
    /// Returns `None` when the range input fails validation; the error text
    /// is set and no request is made.
    pub fn start_number(&mut self) -> Option<BoxFuture<'static, Completion>> {
        match self.range.parse() {
            Ok(request) => {
                debug!(min = request.min, max = request.max, "Generating number");
                let pending = self.number.start(self.gateway.clone(), request);
                Some(pending.map(Completion::Number).boxed())
            }
            Err(e) => {
                self.number.reject(e);
                None
            }
        }
    }

    /// Start the quote action.
    pub fn start_quote(&mut self) -> BoxFuture<'static, Completion> {
        let pending = self.quote.start(self.gateway.clone(), QuoteRequest::default());
        pending.map(Completion::Quote).boxed()
    }

    /// Apply a resolved request to its action.
    pub fn finish(&mut self, completion: Completion) {
        match completion {
            Completion::Number(result) => self.number.finish(result),
            Completion::Quote(result) => self.quote.finish(result),
        }
    }

    /// Run the number action to completion.
    pub async fn generate_number(&mut self) {
        if let Some(pending) = self.start_number() {
            let completion = pending.await;
            self.finish(completion);
        }
    }

    /// Run the quote action to completion.
    pub async fn get_quote(&mut self) {
        let completion = self.start_quote().await;
        self.finish(completion);
    }
}
