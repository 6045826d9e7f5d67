//! Action state machine.
//!
//! Tracks the outcome of one user-triggerable action (number or quote).
//! The phase is a tagged union, so result text and error text can never
//! be displayed at the same time.
//!
//! # State Transitions
//!
//! ```text
//! Idle ──> Loading ──> Success
//!   │          └─────> Failed
//!   └────────────────> Failed   (validation rejected, no request)
//!
//! Success / Failed ──> Loading  (re-triggered)
//! ```
//!
//! Completions are applied whatever the current phase is: when two requests
//! race, the one that resolves last wins.

/// Fallback error text when a failure carries no message
pub const REQUEST_FAILED: &str = "Request failed";

/// Phase of a single action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionPhase {
    /// Nothing has happened yet
    #[default]
    Idle,
    /// A request is outstanding
    Loading,
    /// The last request succeeded with this display text
    Success(String),
    /// Validation or the last request failed with this message
    Failed(String),
}

/// What an action card shows: exactly one of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionView<'a> {
    /// The prompt note (idle, loading, or an empty result)
    Prompt,
    Result(&'a str),
    Error(&'a str),
}

/// Per-action UI state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionState {
    phase: ActionPhase,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ActionPhase {
        &self.phase
    }

    /// Clear any previous outcome and mark a request as outstanding.
    pub fn begin(&mut self) {
        self.phase = ActionPhase::Loading;
    }

    /// Record a successful resolution.
    pub fn succeed(&mut self, text: impl Into<String>) {
        self.phase = ActionPhase::Success(text.into());
    }

    /// Record a failure. An empty message becomes [`REQUEST_FAILED`].
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        let message = if message.is_empty() {
            REQUEST_FAILED.to_string()
        } else {
            message
        };
        self.phase = ActionPhase::Failed(message);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ActionPhase::Loading)
    }

    /// Result text, empty unless the phase is `Success`
    pub fn result_text(&self) -> &str {
        match &self.phase {
            ActionPhase::Success(text) => text,
            _ => "",
        }
    }

    /// Error text, empty unless the phase is `Failed`
    pub fn error_text(&self) -> &str {
        match &self.phase {
            ActionPhase::Failed(message) => message,
            _ => "",
        }
    }

    pub fn view(&self) -> ActionView<'_> {
        match &self.phase {
            ActionPhase::Success(text) if !text.is_empty() => ActionView::Result(text),
            ActionPhase::Failed(message) => ActionView::Error(message),
            _ => ActionView::Prompt,
        }
    }
}
