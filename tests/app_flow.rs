use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use fitvids::{
    config::SearchConfig,
    error::FetchError,
    http::VideoFetcher,
    model::{ResultCount, SearchResponse, VideoItem},
    search::state::TRANSPORT_ERROR_MESSAGE,
    ui::{
        app::App,
        components::results::BANNER_TITLE,
        input::InputHandler,
        message::AppMessage,
        state::Focus,
    },
};
use pretty_assertions::assert_eq;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};

#[derive(Default)]
struct RecordingFetcher {
    calls: Mutex<Vec<(String, u8)>>,
    offline: bool,
}

impl RecordingFetcher {
    fn calls(&self) -> Vec<(String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoFetcher for RecordingFetcher {
    async fn search(&self, query: &str, count: ResultCount) -> Result<SearchResponse, FetchError> {
        self.calls.lock().unwrap().push((query.to_string(), count.get()));
        if self.offline {
            return Err(FetchError::Transport("network unreachable".into()));
        }

        let results = (1..=count.get())
            .map(|n| VideoItem {
                video_url: format!("{query}-{n}.mp4"),
                heading: format!("{query} {n}"),
                tags: vec!["beginner".into()],
            })
            .collect();
        Ok(SearchResponse {
            status: "success".into(),
            results,
        })
    }
}

fn app(fetcher: Arc<RecordingFetcher>) -> App {
    App::with_fetcher(fetcher, &SearchConfig::default())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let msg = InputHandler::handle_key(key, app.state.focus).unwrap();
        app.update(msg);
    }
}

async fn settle(app: &mut App) {
    let evt = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv_async())
        .await
        .expect("search finished")
        .unwrap();
    app.on_event(evt);
}

fn screen(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test(start_paused = true)]
async fn starts_on_the_welcome_banner() {
    let app = app(Arc::new(RecordingFetcher::default()));
    let screen = screen(&app, 100, 24);

    assert!(screen.contains(BANNER_TITLE));
    assert!(screen.contains("Search videos..."));
    assert!(screen.contains(" 6"));
}

#[tokio::test(start_paused = true)]
async fn typing_yoga_renders_requested_number_of_cards() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher.clone());

    type_text(&mut app, "yoga");
    settle(&mut app).await;

    assert_eq!(fetcher.calls(), vec![("yoga".to_string(), 6)]);
    assert_eq!(app.search.view().videos().len(), 6);

    let screen = screen(&app, 100, 40);
    assert!(screen.contains("▶ yoga-1.mp4"));
    assert!(screen.contains("[beginner]"));
    assert!(!screen.contains(BANNER_TITLE));
}

#[tokio::test(start_paused = true)]
async fn count_selector_triggers_new_search() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher.clone());

    type_text(&mut app, "core");
    settle(&mut app).await;

    app.update(AppMessage::FocusNext);
    assert_eq!(app.state.focus, Focus::Count);
    type_text(&mut app, "2");
    settle(&mut app).await;

    assert_eq!(
        fetcher.calls(),
        vec![("core".to_string(), 6), ("core".to_string(), 2)]
    );
    assert_eq!(app.search.view().videos().len(), 2);

    // Same value again must not issue another request.
    app.update(AppMessage::SetCount(ResultCount::new(2).unwrap()));
    assert!(!app.search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_returns_to_banner_without_request() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher.clone());

    type_text(&mut app, "abs");
    app.update(AppMessage::ClearQuery);

    assert!(app.search.view().is_idle());
    assert!(
        tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv_async())
            .await
            .is_err()
    );
    assert!(fetcher.calls().is_empty());
    assert!(screen(&app, 100, 24).contains(BANNER_TITLE));
}

#[tokio::test(start_paused = true)]
async fn backspace_to_empty_behaves_like_clear() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher.clone());

    type_text(&mut app, "ab");
    app.update(AppMessage::DeleteChar);
    app.update(AppMessage::DeleteChar);
    app.update(AppMessage::DeleteChar);

    assert!(app.search.view().is_idle());
    assert_eq!(app.search.query().text, "");
    assert!(!app.search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn offline_shows_generic_error() {
    let fetcher = Arc::new(RecordingFetcher {
        offline: true,
        ..Default::default()
    });
    let mut app = app(fetcher);

    app.update(AppMessage::Paste("morning\nstretch".into()));
    settle(&mut app).await;

    assert_eq!(app.search.query().text, "morningstretch");
    assert_eq!(app.search.view().error(), Some(TRANSPORT_ERROR_MESSAGE));
    assert!(screen(&app, 100, 24).contains(TRANSPORT_ERROR_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn scroll_is_bounded_and_resets_on_new_results() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher);

    type_text(&mut app, "run");
    settle(&mut app).await;

    // Six cards in three columns make two grid rows.
    let first = screen(&app, 120, 30);
    assert!(first.contains("▶ run-1.mp4"));

    for _ in 0..5 {
        app.update(AppMessage::ScrollDown);
    }
    assert_eq!(app.state.scroll, 1);
    let bottom = screen(&app, 120, 30);
    assert!(!bottom.contains("▶ run-1.mp4"));
    assert!(bottom.contains("▶ run-4.mp4"));

    app.update(AppMessage::ScrollUp);
    assert_eq!(app.state.scroll, 0);
    assert!(screen(&app, 120, 30).contains("▶ run-1.mp4"));

    app.update(AppMessage::ScrollDown);
    type_text(&mut app, "s");
    settle(&mut app).await;
    assert_eq!(app.state.scroll, 0);
}

#[tokio::test(start_paused = true)]
async fn results_stay_visible_without_terminal_focus() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher);

    type_text(&mut app, "yoga");
    settle(&mut app).await;
    app.has_focus = false;

    let screen = screen(&app, 100, 40);
    assert!(screen.contains("▶ yoga-1.mp4"));
}

#[tokio::test(start_paused = true)]
async fn quit_cancels_pending_search() {
    let fetcher = Arc::new(RecordingFetcher::default());
    let mut app = app(fetcher.clone());

    type_text(&mut app, "yoga");
    app.update(AppMessage::Quit);

    assert!(app.should_quit);
    assert!(
        tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv_async())
            .await
            .is_err()
    );
    assert!(fetcher.calls().is_empty());
}
