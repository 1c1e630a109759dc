use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{ui::components::spinner::Spinner, util::colors};

pub const PLACEHOLDER: &str = "Search videos...";

pub struct SearchBar<'a> {
    text: &'a str,
    focused: bool,
    pending: bool,
    tick: u64,
}

impl<'a> SearchBar<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self {
            text,
            focused,
            pending: false,
            tick: 0,
        }
    }

    pub fn pending(mut self, pending: bool, tick: u64) -> Self {
        self.pending = pending;
        self.tick = tick;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let spinner = self.pending.then(|| {
            Spinner::new(self.tick)
                .with_style(Style::default().fg(colors::ACCENT))
                .with_label("Searching...")
        });
        let reserved = spinner.as_ref().map_or(0, |s| s.width() + 1);
        let text_width = inner.width.saturating_sub(reserved);

        let line = if self.text.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled("▏", Style::default().fg(colors::PRIMARY)));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::ITALIC),
            ));
            Line::from(spans)
        } else {
            // Keep the tail of long queries visible, where the user is typing.
            let mut visible = self.text;
            let budget = text_width.saturating_sub(1) as usize;
            while visible.width() > budget {
                let mut chars = visible.chars();
                chars.next();
                visible = chars.as_str();
            }
            let mut spans = vec![Span::raw(visible)];
            if self.focused {
                spans.push(Span::styled("▏", Style::default().fg(colors::PRIMARY)));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(
            Rect {
                width: text_width,
                ..inner
            },
            buf,
        );

        if let Some(spinner) = spinner {
            spinner.render(inner, buf);
        }
    }
}
