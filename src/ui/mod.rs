//! Terminal rendering for the skindeals TUI.
//!
//! `ui` draws the header, search bar, status line, the single visible panel,
//! and any open dialog on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AlertSlot, AppState, Focus, ViewState};
use crate::theme::theme;

pub mod cards;
pub mod helpers;
mod modals;
mod recommendations;
mod results;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (mutable for list selection state)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(helpers::header_line(app, &th)), chunks[0]);
    render_search_bar(f, app, chunks[1]);
    if let Some(alert) = app.alert(AlertSlot::Status) {
        f.render_widget(Paragraph::new(helpers::alert_line(alert, &th)), chunks[2]);
    }

    match app.view {
        ViewState::Empty => render_placeholder(
            f,
            chunks[3],
            "Search for a product, or set your skin preferences (^P) for recommendations.",
        ),
        ViewState::Loading => render_placeholder(f, chunks[3], "Searching for the best deals…"),
        ViewState::Results => results::render_results(f, app, chunks[3]),
        ViewState::Recommendations => recommendations::render_recommendations(f, app, chunks[3]),
    }

    let footer = helpers::footer_hint(app);
    f.render_widget(
        Paragraph::new(Span::styled(footer, Style::default().fg(th.muted))),
        chunks[4],
    );

    modals::render_modal(f, app, area);
}

/// Search input with the location and match-profile toggles.
fn render_search_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let toggle = |label: &str, on: bool| {
        Span::styled(
            format!("[{}] {label}  ", if on { "x" } else { " " }),
            Style::default().fg(if on { th.success } else { th.muted }),
        )
    };
    let mut spans = vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.focus } else { th.muted }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.dim }),
        ),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(th.focus)));
    }
    let mut title = vec![Span::styled(" Search ", Style::default().fg(th.muted))];
    title.push(toggle("Use my location (^T)", app.use_location));
    if app.match_toggle_available() {
        title.push(toggle("Match my skin profile (^F)", app.match_profile));
    }
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.focus } else { th.border })),
    );
    f.render_widget(bar, area);
}

/// Centered hint text for the Empty and Loading panels.
fn render_placeholder(f: &mut Frame, area: Rect, text: &str) {
    let th = theme();
    let p = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(th.dim).add_modifier(Modifier::ITALIC),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.selection)),
    );
    f.render_widget(p, area);
}
