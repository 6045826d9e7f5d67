//! TUI state: focus, quit flag, spinner, and the page controller
//!
//! All mutation happens on the event loop. [`TuiState::apply`] turns a key
//! action into a state change and, when a request starts, hands back the
//! detached future for the loop to spawn.

use super::mode::{Action, Focus};
use futures::future::BoxFuture;
use generator_application::{Completion, PageController};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TuiState {
    pub page: PageController,
    pub focus: Focus,
    pub should_quit: bool,
    /// Base URL shown in the footer, verbatim
    pub backend_url: String,
    spinner_frame: usize,
}

impl TuiState {
    pub fn new(page: PageController, backend_url: impl Into<String>) -> Self {
        Self {
            page,
            focus: Focus::default(),
            should_quit: false,
            backend_url: backend_url.into(),
            spinner_frame: 0,
        }
    }

    /// Advance the busy spinner
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Apply a key action. Returns the request to spawn, if one started.
    pub fn apply(&mut self, action: Action) -> Option<BoxFuture<'static, Completion>> {
        match action {
            Action::None => None,
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            Action::FocusPrev => {
                self.focus = self.focus.prev();
                None
            }
            Action::InsertChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
                None
            }
            Action::DeleteChar => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
                None
            }
            Action::Submit => self.submit_range(),
            Action::Activate => match self.focus {
                Focus::Min | Focus::Max => self.submit_range(),
                Focus::Generate => self.trigger_number(),
                Focus::GetQuote => self.trigger_quote(),
            },
            Action::TriggerNumber => self.trigger_number(),
            Action::TriggerQuote => self.trigger_quote(),
        }
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Min => Some(self.page.range_mut().min_mut()),
            Focus::Max => Some(self.page.range_mut().max_mut()),
            Focus::Generate | Focus::GetQuote => None,
        }
    }

    /// Form submit from a field: runs the validation gate even when the
    /// input is invalid, so the user sees why nothing was sent.
    fn submit_range(&mut self) -> Option<BoxFuture<'static, Completion>> {
        if self.page.number().is_loading() {
            return None;
        }
        self.page.start_number()
    }

    /// A disabled button ignores activation
    fn trigger_number(&mut self) -> Option<BoxFuture<'static, Completion>> {
        if !self.page.number_enabled() {
            return None;
        }
        self.page.start_number()
    }

    fn trigger_quote(&mut self) -> Option<BoxFuture<'static, Completion>> {
        if !self.page.quote_enabled() {
            return None;
        }
        Some(self.page.start_quote())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use generator_application::{GatewayError, GeneratorGateway};
    use generator_domain::{NumberRequest, NumberResponse, QuoteResponse};
    use std::sync::Arc;

    /// Gateway that echoes `max` and always returns the same quote.
    pub(crate) struct EchoGateway;

    #[async_trait]
    impl GeneratorGateway for EchoGateway {
        async fn get_random_number(
            &self,
            request: &NumberRequest,
        ) -> Result<NumberResponse, GatewayError> {
            Ok(NumberResponse { value: request.max })
        }

        async fn get_random_quote(&self) -> Result<QuoteResponse, GatewayError> {
            Ok(QuoteResponse {
                quote: "Talk is cheap. Show me the code.".to_string(),
            })
        }
    }

    pub(crate) fn test_state() -> TuiState {
        TuiState::new(
            PageController::new(Arc::new(EchoGateway)),
            "http://localhost:8080",
        )
    }

    #[test]
    fn test_new_state() {
        let state = test_state();
        assert_eq!(state.focus, Focus::Min);
        assert!(!state.should_quit);
        assert_eq!(state.page.range().min(), "1");
        assert_eq!(state.page.range().max(), "10");
    }

    #[test]
    fn test_quit() {
        let mut state = test_state();
        assert!(state.apply(Action::Quit).is_none());
        assert!(state.should_quit);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = test_state();
        state.apply(Action::InsertChar('5'));
        assert_eq!(state.page.range().min(), "15");

        state.apply(Action::FocusNext);
        state.apply(Action::DeleteChar);
        state.apply(Action::DeleteChar);
        state.apply(Action::InsertChar('9'));
        assert_eq!(state.page.range().max(), "9");
    }

    #[test]
    fn test_typing_on_button_is_ignored() {
        let mut state = test_state();
        state.focus = Focus::Generate;
        state.apply(Action::InsertChar('5'));
        state.apply(Action::DeleteChar);
        assert_eq!(state.page.range().min(), "1");
        assert_eq!(state.page.range().max(), "10");
    }

    #[tokio::test]
    async fn test_generate_button_runs_request() {
        let mut state = test_state();
        state.focus = Focus::Generate;

        let pending = state.apply(Action::Activate).unwrap();
        assert!(state.page.number().is_loading());
        // Disabled while loading
        assert!(state.apply(Action::Activate).is_none());
        assert!(state.apply(Action::Submit).is_none());

        state.page.finish(pending.await);
        assert_eq!(state.page.number().result_text(), "10");
    }

    #[test]
    fn test_disabled_generate_ignores_activation() {
        let mut state = test_state();
        state.page.set_min("abc");
        state.focus = Focus::Generate;

        assert!(state.apply(Action::Activate).is_none());
        assert!(state.apply(Action::TriggerNumber).is_none());
        assert_eq!(state.page.number().error_text(), "");
    }

    #[test]
    fn test_submit_from_field_shows_validation_error() {
        let mut state = test_state();
        state.page.set_max("");

        assert!(state.apply(Action::Submit).is_none());
        assert_eq!(
            state.page.number().error_text(),
            "Please enter valid numbers"
        );
        assert!(!state.page.number().is_loading());
    }

    #[tokio::test]
    async fn test_quote_shortcut() {
        let mut state = test_state();
        state.focus = Focus::Generate;

        let pending = state.apply(Action::TriggerQuote).unwrap();
        assert!(state.page.quote().is_loading());
        assert!(!state.page.number().is_loading());
        assert!(state.apply(Action::TriggerQuote).is_none());

        state.page.finish(pending.await);
        assert_eq!(
            state.page.quote().result_text(),
            "Talk is cheap. Show me the code."
        );
    }

    #[test]
    fn test_spinner_cycles() {
        let mut state = test_state();
        let first = state.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            state.tick();
        }
        assert_eq!(state.spinner(), first);
        state.tick();
        assert_ne!(state.spinner(), first);
    }
}
