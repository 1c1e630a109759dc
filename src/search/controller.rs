use std::{sync::Arc, time::Duration};

use flume::Sender;
use tracing::{debug, error, info, warn};

use crate::{
    error::FetchError,
    event::events::{Event, SearchOutcome},
    http::VideoFetcher,
    model::{QueryState, ResultCount},
    search::{debounce::Debouncer, state::ViewState},
};

/// Owns the query, the debounced request trigger and the resulting view state.
///
/// Every input change bumps `generation`. A completed request is only applied
/// when it carries the current generation, so a slow response for an older
/// query can never replace a newer one.
pub struct SearchController {
    fetcher: Arc<dyn VideoFetcher>,
    event_tx: Sender<Event>,
    delay: Duration,
    debouncer: Debouncer,
    query: QueryState,
    view: ViewState,
    generation: u64,
    awaiting: Option<u64>,
}

impl SearchController {
    pub fn new(
        fetcher: Arc<dyn VideoFetcher>,
        event_tx: Sender<Event>,
        delay: Duration,
        count: ResultCount,
    ) -> Self {
        Self {
            fetcher,
            event_tx,
            delay,
            debouncer: Debouncer::new(),
            query: QueryState::new(count),
            view: ViewState::Idle,
            generation: 0,
            awaiting: None,
        }
    }

    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.schedule();
    }

    pub fn on_count_change(&mut self, count: ResultCount) {
        self.query.count = count;
        self.schedule();
    }

    /// Applies a finished request. Returns `false` when the response belongs to
    /// a superseded generation and was dropped.
    pub fn on_search_finished(&mut self, generation: u64, outcome: SearchOutcome) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale search response"
            );
            return false;
        }

        log_outcome(&self.query, &outcome);
        self.awaiting = None;
        self.view = ViewState::classify(outcome);
        true
    }

    pub fn shutdown(&mut self) {
        if self.debouncer.cancel() {
            debug!("pending search cancelled on shutdown");
        }
        self.awaiting = None;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True from the moment a search is scheduled until its response arrives.
    pub fn is_pending(&self) -> bool {
        self.awaiting == Some(self.generation)
    }

    fn schedule(&mut self) {
        self.generation += 1;

        if self.query.is_empty() {
            if self.debouncer.cancel() {
                debug!("pending search cancelled by empty query");
            }
            self.awaiting = None;
            self.view = ViewState::Idle;
            return;
        }

        let generation = self.generation;
        let fetcher = self.fetcher.clone();
        let tx = self.event_tx.clone();
        let text = self.query.text.clone();
        let count = self.query.count;

        self.awaiting = Some(generation);
        self.debouncer.schedule(self.delay, async move {
            debug!(generation, query = %text, count = count.get(), "sending search");
            let outcome = fetcher.search(&text, count).await;
            let _ = tx.send_async(Event::SearchFinished { generation, outcome }).await;
        });
    }
}

fn log_outcome(query: &QueryState, outcome: &SearchOutcome) {
    match outcome {
        Err(err @ FetchError::Status(_)) => {
            warn!(query = %query.text, "Error fetching data: {}", err);
        }
        Err(err) => {
            error!(query = %query.text, "Error fetching data: {:?}", err);
        }
        Ok(response) if !response.is_success() || response.results.is_empty() => {
            info!(
                query = %query.text,
                status = %response.status,
                "search returned no videos"
            );
        }
        Ok(response) => {
            debug!(query = %query.text, results = response.results.len(), "search succeeded");
        }
    }
}
