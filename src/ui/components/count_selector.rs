use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{model::ResultCount, util::colors};

pub const WIDTH: u16 = 14;

pub struct CountSelector {
    count: ResultCount,
    focused: bool,
}

impl CountSelector {
    pub fn new(count: ResultCount, focused: bool) -> Self {
        Self { count, focused }
    }
}

impl Widget for CountSelector {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, value_style) = if self.focused {
            (
                Style::default().fg(colors::PRIMARY),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(colors::NEUTRAL),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };

        let arrow = |enabled: bool, symbol: &'static str| {
            let style = if enabled {
                Style::default().fg(colors::SECONDARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            Span::styled(symbol, style)
        };

        let n = self.count.get();
        let line = Line::from(vec![
            arrow(n > ResultCount::MIN, "◀ "),
            Span::styled(format!("{n:>2}"), value_style),
            arrow(n < ResultCount::MAX, " ▶"),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(border_style)
                    .title(" Results "),
            )
            .render(area, buf);
    }
}
