use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};
use crate::ui::cards::DealCard;
use crate::ui::helpers::truncate_to_width;

/// What: Build the list item for one deal card.
///
/// Inputs:
/// - `card`: Formatted deal
/// - `width`: Inner width of the list
/// - `th`: Theme
fn deal_item(card: &DealCard, width: usize, th: &Theme) -> ListItem<'static> {
    let mut price_line = vec![Span::styled(
        card.price.clone(),
        Style::default().fg(th.success).add_modifier(Modifier::BOLD),
    )];
    if let Some(was) = &card.was {
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(
            was.clone(),
            Style::default()
                .fg(th.muted)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.seller, width),
            Style::default().fg(th.secondary),
        )),
        Line::from(price_line),
        Line::from(Span::styled(
            truncate_to_width(&card.url, width),
            Style::default().fg(th.focus),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.image_url, width),
            Style::default().fg(th.muted),
        )),
        Line::raw(""),
    ])
}

/// What: Render the Results panel: query header, count line, insights, and deal cards.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (selection state is mutated by the list widget)
/// - `area`: Panel area
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let insights_h: u16 = if app.insights.is_some() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(insights_h),
            Constraint::Min(3),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            format!("Results for \"{}\"  ", app.searched_query),
            Style::default().fg(th.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.count_line.clone(), Style::default().fg(th.dim)),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    if let Some(text) = &app.insights {
        let p = Paragraph::new(text.clone())
            .style(Style::default().fg(th.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(" Insights ", Style::default().fg(th.notice)))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.border)),
            );
        f.render_widget(p, chunks[1]);
    }

    let width = usize::from(chunks[2].width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .deals
        .iter()
        .map(|d| deal_item(&DealCard::from_deal(d, &app.placeholder_image_base), width, &th))
        .collect();
    let focused = app.focus == Focus::Results;
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.background))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Deals ({}) ", app.deals.len()),
                    Style::default().fg(th.muted),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.focus } else { th.border })),
        )
        .highlight_style(Style::default().bg(th.selection))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[2], &mut app.list_state);
}
