//! Editor palette (dark theme)

use ratatui::style::{Color, Modifier, Style};

pub const EDITOR_BG: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
pub const SIDEBAR_BG: Color = Color::Rgb(0x25, 0x25, 0x26);
pub const TITLE_BG: Color = Color::Rgb(0x3c, 0x3c, 0x3c);
pub const TAB_BG: Color = Color::Rgb(0x2d, 0x2d, 0x2d);
pub const STATUS_BG: Color = Color::Rgb(0x00, 0x7a, 0xcc);
pub const SELECTION_BG: Color = Color::Rgb(0x37, 0x37, 0x3d);

pub const TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const MUTED: Color = Color::Rgb(0x85, 0x85, 0x85);
pub const ACCENT: Color = Color::Rgb(0x4f, 0xc1, 0xff);
pub const KEYWORD: Color = Color::Rgb(0x56, 0x9c, 0xd6);
pub const STRING: Color = Color::Rgb(0xce, 0x91, 0x78);
pub const FUNCTION: Color = Color::Rgb(0xdc, 0xdc, 0xaa);
pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

pub const DOT_RED: Color = Color::Rgb(0xff, 0x5f, 0x57);
pub const DOT_YELLOW: Color = Color::Rgb(0xfe, 0xbc, 0x2e);
pub const DOT_GREEN: Color = Color::Rgb(0x28, 0xc8, 0x40);

pub fn editor() -> Style {
    Style::default().fg(TEXT).bg(EDITOR_BG)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn heading() -> Style {
    Style::default().fg(KEYWORD).add_modifier(Modifier::BOLD)
}

pub fn caption() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}
