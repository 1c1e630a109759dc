use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains whatever search results
    /// arrived meanwhile. Returns whether a redraw is needed.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => debug!("terminal ready"),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => app.update(AppMessage::Paste(text)),
            TerminalEvent::Tick => {
                app.state.tick = app.state.tick.wrapping_add(1);
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(_, _) => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        app.on_event(evt);
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt, app.state.focus) {
            app.update(msg);
        }
    }
}
