use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::common::render_dialog;
use crate::state::{AlertSlot, AppState, AuthTab, SignInForm, SignUpForm};
use crate::theme::{Theme, theme};
use crate::ui::helpers::alert_line;

/// One labelled input line; the focused field gets a cursor.
fn field_line(label: &str, value: String, focused: bool, th: &Theme) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(th.focus).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.dim)
    };
    let mut spans = vec![
        Span::styled(format!("{label:>9}: "), label_style),
        Span::styled(value, Style::default().fg(th.text)),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(th.focus)));
    }
    Line::from(spans)
}

/// Password fields are shown as one `*` per typed character.
fn masked(count: usize) -> String {
    "*".repeat(count)
}

/// What: Render the sign-in/sign-up dialog.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (for inline alerts)
/// - `area`: Screen area
/// - `tab`: Active tab
/// - `signin`, `signup`: Form contents
pub fn render_auth(
    f: &mut Frame,
    app: &AppState,
    area: Rect,
    tab: AuthTab,
    signin: &SignInForm,
    signup: &SignUpForm,
) {
    let th = theme();
    let tab_span = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(th.on_accent)
                    .bg(th.active_tab)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(th.muted))
        }
    };
    let mut lines = vec![
        Line::from(vec![
            tab_span("Sign in", tab == AuthTab::SignIn),
            Span::raw("  "),
            tab_span("Sign up", tab == AuthTab::SignUp),
        ]),
        Line::raw(""),
    ];
    let slot = match tab {
        AuthTab::SignIn => {
            lines.push(field_line("Email", signin.email.clone(), signin.focus == 0, &th));
            lines.push(field_line(
                "Password",
                masked(signin.password.char_count()),
                signin.focus == 1,
                &th,
            ));
            AlertSlot::Login
        }
        AuthTab::SignUp => {
            lines.push(field_line("Name", signup.name.clone(), signup.focus == 0, &th));
            lines.push(field_line("Email", signup.email.clone(), signup.focus == 1, &th));
            lines.push(field_line(
                "Password",
                masked(signup.password.char_count()),
                signup.focus == 2,
                &th,
            ));
            AlertSlot::Signup
        }
    };
    lines.push(Line::raw(""));
    if let Some(alert) = app.alert(slot) {
        lines.push(alert_line(alert, &th));
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "Enter submit  Tab next field  ←/→ switch tab  Esc close",
        Style::default().fg(th.muted),
    )));
    let title = match tab {
        AuthTab::SignIn => "Welcome back",
        AuthTab::SignUp => "Create your account",
    };
    render_dialog(f, area, (60, 14), title, lines, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Password fields never show typed characters.
    fn password_is_masked() {
        let th = theme();
        let line = field_line("Password", masked(4), false, &th);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.ends_with("****"));
    }
}
