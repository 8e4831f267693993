use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;
use crate::ui::helpers::centered_rect;

/// What: Render a centered dialog with a styled title and supplied lines.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the dialog
/// - `size`: Maximum `(width, height)` of the dialog
/// - `box_title`: Border title to display
/// - `lines`: Fully prepared line content
/// - `scroll`: Vertical scroll offset
///
/// Details:
/// - Applies consistent theming (double border, dialog background) and clamps the box
///   to the screen.
pub fn render_dialog(
    f: &mut Frame,
    area: Rect,
    size: (u16, u16),
    box_title: &str,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    let th = theme();
    let rect = centered_rect(area, size.0, size.1);
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.dialog))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {box_title} "),
                    Style::default().fg(th.title).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.title))
                .style(Style::default().bg(th.dialog)),
        );
    f.render_widget(boxw, rect);
}
