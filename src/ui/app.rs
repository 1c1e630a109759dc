use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    config::SearchConfig,
    event::events::Event,
    http::{ApiService, VideoFetcher},
    model::ResultCount,
    search::SearchController,
};

use super::{
    layout::AppLayout,
    message::AppMessage,
    state::UiState,
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub search: SearchController,
    pub state: UiState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &SearchConfig) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(config)?);
        info!(endpoint = api.endpoint(), "search endpoint configured");
        Ok(Self::with_fetcher(api, config))
    }

    pub fn with_fetcher(fetcher: Arc<dyn VideoFetcher>, config: &SearchConfig) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let search = SearchController::new(
            fetcher,
            event_tx.clone(),
            config.debounce,
            config.default_count,
        );

        Self {
            event_rx,
            event_tx,
            search,
            state: UiState::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.paste(true);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.draw(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.search.shutdown();
        tui.exit()?;
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        AppLayout::new(self).render(frame, frame.area());
    }

    pub fn update(&mut self, msg: AppMessage) {
        debug!(?msg, "update");
        let query = self.search.query().clone();

        match msg {
            AppMessage::Quit => {
                self.search.shutdown();
                self.should_quit = true;
            }
            AppMessage::FocusNext => self.state.focus = self.state.focus.next(),
            AppMessage::FocusPrevious => self.state.focus = self.state.focus.prev(),
            AppMessage::InsertChar(c) => {
                let mut text = query.text;
                text.push(c);
                self.search.on_query_change(text);
            }
            AppMessage::Paste(pasted) => {
                let pasted: String = pasted.chars().filter(|c| !c.is_control()).collect();
                if !pasted.is_empty() {
                    self.search.on_query_change(query.text + &pasted);
                }
            }
            AppMessage::DeleteChar => {
                let mut text = query.text;
                if text.pop().is_some() {
                    self.search.on_query_change(text);
                }
            }
            AppMessage::ClearQuery => {
                if !query.is_empty() {
                    self.search.on_query_change(String::new());
                }
            }
            AppMessage::CountUp => self.set_count(query.count.increment()),
            AppMessage::CountDown => self.set_count(query.count.decrement()),
            AppMessage::SetCount(count) => self.set_count(count),
            AppMessage::ScrollUp => self.state.scroll = self.state.scroll.saturating_sub(1),
            AppMessage::ScrollDown => {
                let last = self.state.last_grid_row(self.search.view().videos().len());
                self.state.scroll = (self.state.scroll + 1).min(last);
            }
        }
    }

    pub fn on_event(&mut self, evt: Event) {
        match evt {
            Event::SearchFinished {
                generation,
                outcome,
            } => {
                if self.search.on_search_finished(generation, outcome) {
                    self.state.scroll = 0;
                }
            }
        }
    }

    fn set_count(&mut self, count: ResultCount) {
        if count != self.search.query().count {
            self.search.on_count_change(count);
        }
    }
}
