//! TUI widgets: ratatui components for the page layout
//!
//! Wide terminals:
//! ┌── Header (3) ─────────────────────────────────────┐
//! ├── Number card (50%) ──────┬── Quote card (50%) ────┤
//! └── Footer (1) ─────────────┴────────────────────────┘
//!
//! Narrow terminals stack the cards vertically.

pub mod footer;
pub mod header;
pub mod number_card;
pub mod quote_card;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

/// Below this width the cards are stacked
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub number_card: Rect,
    pub quote_card: Rect,
    pub footer: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };

        let cards = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Self {
            header: rows[0],
            number_card: cards[0],
            quote_card: cards[1],
            footer: rows[2],
        }
    }
}

/// Render a button label, reflecting focus and the disabled state
pub(crate) fn button(label: String, focused: bool, enabled: bool) -> Span<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
    };
    Span::styled(format!("[ {} ]", label), style)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.number_card.y, layout.quote_card.y);
        assert!(layout.quote_card.x > layout.number_card.x);
    }

    #[test]
    fn test_narrow_layout_is_stacked() {
        let layout = MainLayout::compute(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.number_card.x, layout.quote_card.x);
        assert!(layout.quote_card.y > layout.number_card.y);
        assert_eq!(layout.number_card.width, 60);
    }

    #[test]
    fn test_button_label() {
        let span = button("Generate".into(), false, true);
        assert_eq!(span.content, "[ Generate ]");
        assert_eq!(
            button("Generate".into(), true, false).style.fg,
            Some(Color::DarkGray)
        );
    }
}
