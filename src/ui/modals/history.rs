use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::common::render_dialog;
use crate::state::HistoryEntry;
use crate::theme::{Theme, theme};

/// What: Lines for the history dialog, newest session first as received.
pub(crate) fn history_lines(entries: &[HistoryEntry], th: &Theme) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled(
            "No recommendation history yet.",
            Style::default().fg(th.dim),
        ))];
    }
    let mut lines = Vec::new();
    for entry in entries {
        let when = entry.created_at.get(..10).unwrap_or(&entry.created_at);
        lines.push(Line::from(Span::styled(
            format!("Session {}", if when.is_empty() { "(undated)" } else { when }),
            Style::default().fg(th.title).add_modifier(Modifier::BOLD),
        )));
        for item in &entry.recommendations {
            let name = item
                .product
                .as_ref()
                .map_or("Product", |p| p.display_name());
            let score = item
                .match_score
                .map(|s| format!("  ({s:.2})"))
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", item.rank), Style::default().fg(th.muted)),
                Span::styled(name.to_string(), Style::default().fg(th.text)),
                Span::styled(score, Style::default().fg(th.faint)),
            ]));
            if let Some(reason) = item.reason.as_deref().filter(|r| !r.trim().is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("     {reason}"),
                    Style::default().fg(th.dim).add_modifier(Modifier::ITALIC),
                )));
            }
        }
        lines.push(Line::raw(""));
    }
    lines
}

/// What: Render past recommendation runs.
pub fn render_history(f: &mut Frame, area: Rect, entries: &[HistoryEntry], scroll: u16) {
    let th = theme();
    render_dialog(
        f,
        area,
        (80, 24),
        "Recommendation history",
        history_lines(entries, &th),
        scroll,
    );
}
