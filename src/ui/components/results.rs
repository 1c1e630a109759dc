use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    search::ViewState,
    ui::components::card::{Card, CardWidget},
    util::colors,
};

pub const BANNER_TITLE: &str = "Welcome to Fitness Videos";
pub const BANNER_SUBTITLE: &str = "Get fit and healthy with our workout videos";

const CARD_MIN_WIDTH: u16 = 30;
const MAX_COLUMNS: u16 = 3;

/// What the results area shows, derived from the view state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    Banner {
        title: &'static str,
        subtitle: &'static str,
    },
    Message(String),
    Grid(Vec<Card>),
}

impl Scene {
    pub fn from_view(view: &ViewState) -> Self {
        match view {
            ViewState::Idle => Scene::Banner {
                title: BANNER_TITLE,
                subtitle: BANNER_SUBTITLE,
            },
            ViewState::Error(message) => Scene::Message(message.clone()),
            ViewState::Results(videos) => Scene::Grid(videos.iter().map(Card::from).collect()),
        }
    }
}

pub fn columns_for(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
}

pub struct ResultsView {
    scene: Scene,
    scroll: usize,
}

impl ResultsView {
    pub fn new(view: &ViewState) -> Self {
        Self {
            scene: Scene::from_view(view),
            scroll: 0,
        }
    }

    /// First grid row to draw; clamped to the last row at render time.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

fn centered_rows(area: Rect, rows: u16) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(rows),
            Constraint::Fill(1),
        ])
        .areas(area);
    middle
}

fn render_grid(cards: &[Card], scroll: usize, area: Rect, buf: &mut Buffer) {
    let columns = columns_for(area.width);
    let column_width = area.width / columns;
    let rows: Vec<&[Card]> = cards.chunks(columns as usize).collect();
    let skip = scroll.min(rows.len().saturating_sub(1));

    let mut y = area.y;
    for (row_index, row) in rows.iter().enumerate().skip(skip) {
        if y >= area.bottom() {
            break;
        }

        let height = row
            .iter()
            .enumerate()
            .map(|(i, card)| CardWidget::new(card, i + 1).height(column_width))
            .max()
            .unwrap_or(0)
            .min(area.bottom() - y);

        for (i, card) in row.iter().enumerate() {
            let number = row_index * columns as usize + i + 1;
            let cell = Rect::new(area.x + i as u16 * column_width, y, column_width, height);
            CardWidget::new(card, number).render(cell, buf);
        }

        y += height;
    }
}

impl Widget for ResultsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.scene {
            Scene::Banner { title, subtitle } => {
                let lines = vec![
                    Line::styled(
                        title,
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                    Line::styled(subtitle, Style::default().fg(colors::SECONDARY)),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(centered_rows(area, 3), buf);
            }
            Scene::Message(message) => {
                Paragraph::new(Line::styled(
                    message,
                    Style::default()
                        .fg(colors::ERROR)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(centered_rows(area, 1), buf);
            }
            Scene::Grid(cards) => render_grid(&cards, self.scroll, area, buf),
        }
    }
}
