use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{model::VideoItem, util::colors};

/// Rows a card uses besides its chips: two borders, media line, heading, gap.
const FIXED_ROWS: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub source: String,
    pub heading: String,
    pub chips: Vec<String>,
}

impl From<&VideoItem> for Card {
    fn from(video: &VideoItem) -> Self {
        Self {
            source: video.video_url.clone(),
            heading: video.heading.clone(),
            chips: video.tags.clone(),
        }
    }
}

pub struct CardWidget<'a> {
    card: &'a Card,
    number: usize,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a Card, number: usize) -> Self {
        Self { card, number }
    }

    pub fn height(&self, width: u16) -> u16 {
        let chip_rows = chip_rows(&self.card.chips, width.saturating_sub(2)).len() as u16;
        FIXED_ROWS + chip_rows
    }
}

fn chip_label(tag: &str) -> String {
    format!("[{tag}]")
}

/// Packs chips greedily into rows of at most `width` columns, in tag order.
/// A chip wider than a whole row gets a row to itself.
pub fn chip_rows(chips: &[String], width: u16) -> Vec<Vec<String>> {
    let width = width as usize;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut used = 0;

    for chip in chips.iter().map(|tag| chip_label(tag)) {
        let chip_width = chip.width();
        match rows.last_mut() {
            Some(row) if used + 1 + chip_width <= width => {
                row.push(chip);
                used += 1 + chip_width;
            }
            _ => {
                used = chip_width;
                rows.push(vec![chip]);
            }
        }
    }

    rows
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(format!(" {} ", self.number));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("▶ ", Style::default().fg(colors::ACCENT)),
                Span::styled(
                    self.card.source.as_str(),
                    Style::default()
                        .fg(colors::SECONDARY)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(Span::styled(
                self.card.heading.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        let chip_style = Style::default().fg(colors::PRIMARY);
        for row in chip_rows(&self.card.chips, inner.width) {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, chip) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(chip, chip_style));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
