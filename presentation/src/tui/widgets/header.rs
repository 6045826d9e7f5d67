//! Header widget: page title

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "Generator";
pub const SUBTITLE: &str = "Random Number & Random Quote";

pub struct HeaderWidget;

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![Span::styled(
            SUBTITLE,
            Style::default().fg(Color::Yellow),
        )]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", TITLE),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
