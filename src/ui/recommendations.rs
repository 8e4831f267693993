use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::cards::RecommendationCard;
use crate::ui::helpers::truncate_to_width;

/// What: Render recommendation cards with their "find best price" hint.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (selection state is mutated by the list widget)
/// - `area`: Panel area
pub fn render_recommendations(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .recommendations
        .iter()
        .map(|r| {
            let card = RecommendationCard::from_recommendation(r, &app.placeholder_image_base);
            let mut lines = vec![
                Line::from(Span::styled(
                    truncate_to_width(&card.title, width),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&card.seller, width),
                    Style::default().fg(th.secondary),
                )),
            ];
            if let Some(reason) = &card.reason {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(reason, width),
                    Style::default().fg(th.faint).add_modifier(Modifier::ITALIC),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    card.price,
                    Style::default().fg(th.success).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Enter: find best price", Style::default().fg(th.muted)),
            ]));
            lines.push(Line::from(Span::styled(
                truncate_to_width(card.url.as_deref().unwrap_or(&card.image_url), width),
                Style::default().fg(th.muted),
            )));
            lines.push(Line::raw(""));
            ListItem::new(lines)
        })
        .collect();

    let focused = app.focus == Focus::Results;
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.background))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Recommended for your skin ({}) ", app.recommendations.len()),
                    Style::default().fg(th.title).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.focus } else { th.border })),
        )
        .highlight_style(Style::default().bg(th.selection))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
