use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    model::ResultCount,
    ui::{message::AppMessage, state::Focus},
};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, focus: Focus) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(AppMessage::Quit),
            (KeyCode::Esc, _) => return Some(AppMessage::Quit),
            (KeyCode::Tab, _) => return Some(AppMessage::FocusNext),
            (KeyCode::BackTab, _) => return Some(AppMessage::FocusPrevious),
            (KeyCode::PageUp, _) => return Some(AppMessage::ScrollUp),
            (KeyCode::PageDown, _) => return Some(AppMessage::ScrollDown),
            _ => {}
        }

        match focus {
            Focus::Query => Self::handle_query_key(key),
            Focus::Count => Self::handle_count_key(key),
        }
    }

    fn handle_query_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppMessage::ClearQuery),
            (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => None,
            (KeyCode::Char(c), _) => Some(AppMessage::InsertChar(c)),
            (KeyCode::Backspace, _) => Some(AppMessage::DeleteChar),
            _ => None,
        }
    }

    fn handle_count_key(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                Some(AppMessage::CountUp)
            }
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => Some(AppMessage::CountDown),
            KeyCode::Char('0') => ResultCount::new(ResultCount::MAX)
                .ok()
                .map(AppMessage::SetCount),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| ResultCount::new(d as u8).ok())
                .map(AppMessage::SetCount),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn global_keys_ignore_focus() {
        for focus in [Focus::Query, Focus::Count] {
            assert_eq!(InputHandler::handle_key(ctrl('c'), focus), Some(AppMessage::Quit));
            assert_eq!(
                InputHandler::handle_key(key(KeyCode::Tab), focus),
                Some(AppMessage::FocusNext)
            );
            assert_eq!(
                InputHandler::handle_key(key(KeyCode::PageDown), focus),
                Some(AppMessage::ScrollDown)
            );
        }
    }

    #[test]
    fn query_field_takes_text() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('7')), Focus::Query),
            Some(AppMessage::InsertChar('7'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Backspace), Focus::Query),
            Some(AppMessage::DeleteChar)
        );
        assert_eq!(
            InputHandler::handle_key(ctrl('u'), Focus::Query),
            Some(AppMessage::ClearQuery)
        );
        assert_eq!(InputHandler::handle_key(ctrl('x'), Focus::Query), None);
    }

    #[test]
    fn count_selector_keys() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Up), Focus::Count),
            Some(AppMessage::CountUp)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('-')), Focus::Count),
            Some(AppMessage::CountDown)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('3')), Focus::Count),
            Some(AppMessage::SetCount(ResultCount::new(3).unwrap()))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('0')), Focus::Count),
            Some(AppMessage::SetCount(ResultCount::new(10).unwrap()))
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('x')), Focus::Count), None);
    }
}
