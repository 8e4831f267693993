use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::common::render_dialog;
use crate::state::vocab::humanize;
use crate::state::{AlertSlot, AppState, PreferenceForm, PreferenceRow};
use crate::theme::{Theme, theme};
use crate::ui::helpers::alert_line;

/// Section heading shown before the first row of each group.
const fn section_title(row: PreferenceRow) -> &'static str {
    match row {
        PreferenceRow::SkinType(_) => "Skin type (required)",
        PreferenceRow::Concern(_) => "Skin concerns",
        PreferenceRow::BudgetMin | PreferenceRow::BudgetMax => "Budget",
        PreferenceRow::Preferred(_) => "Preferred ingredients",
        PreferenceRow::Avoided(_) => "Ingredients to avoid",
        PreferenceRow::ProductPreference(_) => "Product preferences",
    }
}

/// What: Text of one form row.
///
/// Output:
/// - `(•)`/`( )` for skin types, `[x]`/`[ ]` for checkboxes, the typed text for budgets.
pub(crate) fn row_text(form: &PreferenceForm, row: PreferenceRow) -> String {
    let checked = form.is_checked(row);
    match row {
        PreferenceRow::SkinType(s) => {
            format!("({}) {}", if checked { "•" } else { " " }, humanize(s))
        }
        PreferenceRow::Concern(s)
        | PreferenceRow::Preferred(s)
        | PreferenceRow::Avoided(s)
        | PreferenceRow::ProductPreference(s) => {
            format!("[{}] {}", if checked { "x" } else { " " }, humanize(s))
        }
        PreferenceRow::BudgetMin => format!("Min $ {}", form.budget_min),
        PreferenceRow::BudgetMax => format!("Max $ {}", form.budget_max),
    }
}

/// Builds all lines, returning them with the line index of the cursor row.
fn form_lines(form: &PreferenceForm, th: &Theme) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    let mut last_section = "";
    for (idx, row) in PreferenceForm::rows().into_iter().enumerate() {
        let section = section_title(row);
        if section != last_section {
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(th.title).add_modifier(Modifier::BOLD),
            )));
            last_section = section;
        }
        let selected = idx == form.cursor;
        if selected {
            cursor_line = lines.len();
        }
        let style = if selected {
            Style::default().fg(th.on_accent).bg(th.active_tab)
        } else if form.is_checked(row) {
            Style::default().fg(th.success)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", row_text(form, row)),
            style,
        )));
    }
    (lines, cursor_line)
}

/// What: Render the preferences quiz.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (for the inline alert)
/// - `area`: Screen area
/// - `form`: Form contents
///
/// Details:
/// - The body scrolls so the cursor row stays visible; alerts and key hints stay on top.
pub fn render_preferences(f: &mut Frame, app: &AppState, area: Rect, form: &PreferenceForm) {
    let th = theme();
    let mut lines = vec![Line::from(Span::styled(
        "Space toggle  digits edit budget  Enter save  Esc close",
        Style::default().fg(th.muted),
    ))];
    if let Some(alert) = app.alert(AlertSlot::Preferences) {
        lines.push(alert_line(alert, &th));
    }
    lines.push(Line::raw(""));
    let header_len = lines.len();
    let (body, cursor_line) = form_lines(form, &th);
    lines.extend(body);

    let height: u16 = 30;
    let visible = usize::from(height.saturating_sub(2)).saturating_sub(header_len);
    let scroll = (cursor_line + 1).saturating_sub(visible);
    render_dialog(
        f,
        area,
        (64, height),
        "Your skin profile",
        pin_header(lines, header_len, scroll),
        0,
    );
}

/// Drops `scroll` body lines while keeping the first `header_len` lines in place.
fn pin_header(mut lines: Vec<Line<'static>>, header_len: usize, scroll: usize) -> Vec<Line<'static>> {
    let end = (header_len + scroll).min(lines.len());
    lines.drain(header_len..end);
    lines
}
