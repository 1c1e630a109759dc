use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame; the terminal ticks roughly every 33ms.
const TICKS_PER_FRAME: u64 = 3;

pub struct Spinner {
    tick: u64,
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            style: Style::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn symbol(&self) -> &'static str {
        FRAMES[(self.tick / TICKS_PER_FRAME) as usize % FRAMES.len()]
    }

    pub fn text(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}", self.symbol(), label),
            None => self.symbol().to_string(),
        }
    }

    pub fn width(&self) -> u16 {
        self.text().width() as u16
    }
}

impl Widget for Spinner {
    /// Right-aligned on the first row of `area`.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = self.text();
        let x = area.x + area.width.saturating_sub(text.width() as u16);
        buf.set_stringn(x, area.y, text, area.width as usize, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_advance_with_ticks() {
        assert_eq!(Spinner::new(0).symbol(), "⠋");
        assert_eq!(Spinner::new(TICKS_PER_FRAME).symbol(), "⠙");
        assert_eq!(Spinner::new(TICKS_PER_FRAME * 10).symbol(), "⠋");
        assert_eq!(Spinner::new(0).with_label("Searching...").text(), "⠋ Searching...");
    }
}
