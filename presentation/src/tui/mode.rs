//! Focus ring and key mapping
//!
//! The page has four focusable controls:
//! - Min / Max fields: text entry
//! - Generate / Get Quote buttons: activation
//!
//! Keys are mapped to semantic [`Action`]s based on the focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Focusable control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Min,
    Max,
    Generate,
    GetQuote,
}

impl Focus {
    const RING: [Focus; 4] = [Focus::Min, Focus::Max, Focus::Generate, Focus::GetQuote];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// Whether this control accepts text
    pub fn is_field(self) -> bool {
        matches!(self, Focus::Min | Focus::Max)
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move focus forward (Tab)
    FocusNext,
    /// Move focus backward (Shift+Tab)
    FocusPrev,
    /// Insert character into the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    DeleteChar,
    /// Enter in a field: submit the range form
    Submit,
    /// Enter/Space on a button
    Activate,
    /// Shortcut for Generate
    TriggerNumber,
    /// Shortcut for Get Quote
    TriggerQuote,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current focus
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(focus: Focus, key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => Action::Quit,
            (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::FocusNext,
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::FocusPrev,
            _ if focus.is_field() => Self::handle_field(key),
            _ => Self::handle_button(key),
        }
    }

    fn handle_field(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_button(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
            KeyCode::Char('g') => Action::TriggerNumber,
            KeyCode::Char('q') => Action::TriggerQuote,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_default() {
        assert_eq!(Focus::default(), Focus::Min);
    }

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(Focus::Min.next(), Focus::Max);
        assert_eq!(Focus::Max.next(), Focus::Generate);
        assert_eq!(Focus::Generate.next(), Focus::GetQuote);
        assert_eq!(Focus::GetQuote.next(), Focus::Min);

        assert_eq!(Focus::Min.prev(), Focus::GetQuote);
        assert_eq!(Focus::GetQuote.prev(), Focus::Generate);
    }

    #[test]
    fn test_global_keys() {
        for focus in [Focus::Min, Focus::Generate] {
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(KeyHandler::handle(focus, ctrl_c), Action::Quit);
            assert_eq!(KeyHandler::handle(focus, key(KeyCode::Esc)), Action::Quit);
            assert_eq!(KeyHandler::handle(focus, key(KeyCode::Tab)), Action::FocusNext);
            assert_eq!(KeyHandler::handle(focus, key(KeyCode::BackTab)), Action::FocusPrev);
        }
    }

    #[test]
    fn test_field_key_handling() {
        assert_eq!(
            KeyHandler::handle(Focus::Min, key(KeyCode::Char('7'))),
            Action::InsertChar('7')
        );
        assert_eq!(
            KeyHandler::handle(Focus::Max, key(KeyCode::Char('-'))),
            Action::InsertChar('-')
        );
        // Shortcuts are plain text inside a field
        assert_eq!(
            KeyHandler::handle(Focus::Min, key(KeyCode::Char('q'))),
            Action::InsertChar('q')
        );
        assert_eq!(
            KeyHandler::handle(Focus::Min, key(KeyCode::Backspace)),
            Action::DeleteChar
        );
        assert_eq!(KeyHandler::handle(Focus::Max, key(KeyCode::Enter)), Action::Submit);
        assert_eq!(KeyHandler::handle(Focus::Max, key(KeyCode::F(1))), Action::None);
    }

    #[test]
    fn test_button_key_handling() {
        assert_eq!(
            KeyHandler::handle(Focus::Generate, key(KeyCode::Enter)),
            Action::Activate
        );
        assert_eq!(
            KeyHandler::handle(Focus::GetQuote, key(KeyCode::Char(' '))),
            Action::Activate
        );
        assert_eq!(
            KeyHandler::handle(Focus::GetQuote, key(KeyCode::Char('g'))),
            Action::TriggerNumber
        );
        assert_eq!(
            KeyHandler::handle(Focus::Generate, key(KeyCode::Char('q'))),
            Action::TriggerQuote
        );
        assert_eq!(
            KeyHandler::handle(Focus::Generate, key(KeyCode::Char('x'))),
            Action::None
        );
    }
}
