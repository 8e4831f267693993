//! Shared rendering helpers: width-aware truncation, header chrome, alerts.

use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{AlertKind, AppState, InlineAlert, ViewState};
use crate::theme::Theme;
use crate::util::first_word;

/// What: Truncate text to a display width, appending `…` when cut.
///
/// Inputs:
/// - `text`: Source text.
/// - `max_width`: Available terminal columns.
///
/// Output:
/// - Text whose display width never exceeds `max_width`.
///
/// Details:
/// - Uses Unicode display width, not byte length, so wide characters are measured correctly.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Header text for the current session.
///
/// Output:
/// - `Hi, {first name}` plus logged-in shortcuts, or the guest shortcuts.
#[must_use]
pub fn header_text(app: &AppState) -> (String, &'static str) {
    app.session.as_ref().map_or_else(
        || {
            (
                "Guest".to_string(),
                "^L Sign in  ^U Sign up  ^P Preferences",
            )
        },
        |s| {
            (
                format!("Hi, {}", first_word(&s.user.name)),
                "^P Preferences  ^R History  ^O Log out",
            )
        },
    )
}

/// What: Build the header line shown above the search bar.
#[must_use]
pub fn header_line(app: &AppState, th: &Theme) -> Line<'static> {
    let (who, hints) = header_text(app);
    Line::from(vec![
        Span::styled(
            " skindeals ",
            Style::default()
                .fg(th.on_accent)
                .bg(th.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(who, Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(hints, Style::default().fg(th.muted)),
    ])
}

/// What: Style an inline alert as a single line.
#[must_use]
pub fn alert_line(alert: &InlineAlert, th: &Theme) -> Line<'static> {
    let (mark, color) = match alert.kind {
        AlertKind::Success => ("✓ ", th.success),
        AlertKind::Error => ("✗ ", th.error),
    };
    Line::from(Span::styled(
        format!("{mark}{}", alert.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// What: Center a box of at most `max_w` x `max_h` inside `area`.
///
/// Details:
/// - Leaves a 4-column/2-row margin when the terminal is small.
#[must_use]
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w);
    let h = area.height.saturating_sub(2).min(max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Key hints for the footer line.
///
/// Details:
/// - The match-profile hint appears only while the toggle is available.
pub fn footer_hint(app: &AppState) -> String {
    if app.view == ViewState::Recommendations {
        return "Enter find best price  Tab switch focus  ^T location  ^C quit".to_string();
    }
    let mut hint = String::from("Enter search  Tab switch focus  ^T location  ");
    if app.match_toggle_available() {
        hint.push_str("^F match profile  ");
    }
    hint.push_str("^C quit");
    hint
}
