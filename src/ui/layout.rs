use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        app::App,
        components::{
            count_selector::{self, CountSelector},
            results::{ResultsView, columns_for},
            search_bar::SearchBar,
        },
        state::Focus,
    },
    util::colors,
};

const HINTS: [(&str, &str); 5] = [
    ("Tab", "switch field"),
    ("↑/↓", "result count"),
    ("PgUp/PgDn", "scroll"),
    ("Ctrl+U", "clear"),
    ("Esc", "quit"),
];

pub struct AppLayout<'a> {
    pub app: &'a App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(" Fitness Videos ")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let header_area = chunks[0];
        let results_area = chunks[1];
        let hints_area = chunks[2];

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(count_selector::WIDTH)])
            .split(header_area);

        let search = &self.app.search;
        let ui = &self.app.state;
        ui.grid_columns.set(columns_for(results_area.width));

        f.render_widget(
            SearchBar::new(&search.query().text, ui.focus == Focus::Query)
                .pending(search.is_pending(), ui.tick),
            header[0],
        );
        f.render_widget(
            CountSelector::new(search.query().count, ui.focus == Focus::Count),
            header[1],
        );
        f.render_widget(
            ResultsView::new(search.view()).scroll(ui.scroll),
            results_area,
        );

        let mut spans = Vec::new();
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors::PRIMARY)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            hints_area,
        );
    }
}
