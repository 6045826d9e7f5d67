//! Number card: range fields, Generate button, result/error line

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

pub const PROMPT: &str = "Enter a range and click Generate";
pub const EXAMPLE_NOTE: &str = "Example: 1 and 10";

pub struct NumberCardWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NumberCardWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn field_line(&self, label: &'static str, value: &'a str, focus: Focus) -> Line<'a> {
        let focused = self.state.focus == focus;
        let value_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::styled(value, value_style),
        ];
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'a> {
        let page = &self.state.page;
        let label = if page.number().is_loading() {
            format!("{} Generating…", self.state.spinner())
        } else {
            "Generate".to_string()
        };

        Line::from(vec![
            super::button(
                label,
                self.state.focus == Focus::Generate,
                page.number_enabled(),
            ),
            Span::raw("  "),
            Span::styled(EXAMPLE_NOTE, Style::default().fg(Color::DarkGray)),
        ])
    }

    fn outcome_line(&self) -> Line<'a> {
        match self.state.page.number().view() {
            ActionView::Prompt => Line::from(Span::styled(
                PROMPT,
                Style::default().fg(Color::DarkGray),
            )),
            ActionView::Result(value) => Line::from(vec![
                Span::raw("Result: "),
                Span::styled(
                    value,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            ActionView::Error(message) => Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red),
            )),
        }
    }
}

impl<'a> Widget for NumberCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let range = self.state.page.range();
        let lines = vec![
            self.field_line("Min: ", range.min(), Focus::Min),
            self.field_line("Max: ", range.max(), Focus::Max),
            Line::default(),
            self.button_line(),
            Line::default(),
            self.outcome_line(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Random Number ")
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
