//! Quote card: Get Quote button and the fetched quote

use crate::tui::mode::Focus;
use crate::tui::state::TuiState;
use generator_domain::ActionView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const PROMPT: &str = "Click the button to get a quote";

pub struct QuoteCardWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuoteCardWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for QuoteCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = &self.state.page;
        let label = if page.quote().is_loading() {
            format!("{} Loading…", self.state.spinner())
        } else {
            "Get Quote".to_string()
        };

        let outcome = match page.quote().view() {
            ActionView::Prompt => Line::from(Span::styled(
                PROMPT,
                Style::default().fg(Color::DarkGray),
            )),
            ActionView::Result(quote) => Line::from(vec![
                Span::raw("Quote: "),
                Span::styled(
                    quote,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]),
            ActionView::Error(message) => Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red),
            )),
        };

        let lines = vec![
            Line::from(super::button(
                label,
                self.state.focus == Focus::GetQuote,
                page.quote_enabled(),
            )),
            Line::default(),
            outcome,
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Random Quote ")
            .border_style(Style::default().fg(Color::Magenta));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
