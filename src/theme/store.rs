use ratatui::style::Color;

use super::types::Theme;

/// The built-in dark palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        background: Color::Rgb(0x1e, 0x1e, 0x2e),
        dialog: Color::Rgb(0x18, 0x18, 0x25),
        on_accent: Color::Rgb(0x11, 0x11, 0x1b),
        selection: Color::Rgb(0x45, 0x47, 0x5a),
        border: Color::Rgb(0x58, 0x5b, 0x70),
        muted: Color::Rgb(0x7f, 0x84, 0x9c),
        faint: Color::Rgb(0x93, 0x99, 0xb2),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        dim: Color::Rgb(0xa6, 0xad, 0xc8),
        secondary: Color::Rgb(0xba, 0xc2, 0xde),
        focus: Color::Rgb(0x74, 0xc7, 0xec),
        title: Color::Rgb(0xcb, 0xa6, 0xf7),
        success: Color::Rgb(0xa6, 0xe3, 0xa1),
        notice: Color::Rgb(0xf9, 0xe2, 0xaf),
        error: Color::Rgb(0xf3, 0x8b, 0xa8),
        active_tab: Color::Rgb(0xb4, 0xbe, 0xfe),
    }
}
