//! Footer widget: backend URL + key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "Tab:focus  Enter:activate  g:generate  q:quote  Esc:quit";

pub struct FooterWidget<'a> {
    state: &'a TuiState,
}

impl<'a> FooterWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for FooterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let backend_text = format!(" backend: {}", self.state.backend_url);
        let backend_width = backend_text.chars().count() as u16;
        let backend_line = Line::from(vec![Span::styled(backend_text, bg_style)]);
        buf.set_line(area.x, area.y, &backend_line, area.width);

        // Key hints, right-aligned when there is room
        let hints_width = KEY_HINTS.len() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + backend_width + 1 {
            let hints_line = Line::from(vec![Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            )]);
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::tests::test_state;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn test_footer_shows_backend_url_verbatim() {
        let mut state = test_state();
        state.backend_url = "http://backend.test:9000/".to_string();

        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        FooterWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("backend: http://backend.test:9000/"));
        assert!(text.contains("Esc:quit"));
    }

    #[test]
    fn test_footer_drops_hints_when_narrow() {
        let state = test_state();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        FooterWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("backend: http://localhost:8080"));
        assert!(!text.contains("Esc:quit"));
    }
}
