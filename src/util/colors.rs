use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x004bd4f7);
pub const SECONDARY: Color = Color::from_u32(0x00007d9d);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x0088feca);
pub const ERROR: Color = Color::from_u32(0x00f25f5c);
