//! Keys for the auth, preferences, and history dialogs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{RequestSender, submit_login, submit_preferences, submit_signup};
use crate::state::{AppState, AuthTab, Modal, SignInForm, SignUpForm};

/// Rows moved by `PageUp`/`PageDown` in the preferences form.
const PAGE_ROWS: isize = 5;
/// Lines scrolled by `PageUp`/`PageDown` in the history dialog.
const PAGE_LINES: u16 = 10;

/// What: Route a key to the open dialog.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state with a dialog open
/// - `req_tx`: Request channel
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    match &app.modal {
        Modal::Auth { .. } => handle_auth_key(ke, app, req_tx),
        Modal::Preferences { .. } => handle_preferences_key(ke, app, req_tx),
        Modal::History { .. } => handle_history_key(ke, app),
        Modal::None => {}
    }
}

/// Next field index, wrapping.
const fn step_field(focus: usize, fields: usize, forward: bool) -> usize {
    if forward {
        (focus + 1) % fields
    } else {
        (focus + fields - 1) % fields
    }
}

/// What: Handle keys in the sign-in/sign-up dialog.
///
/// Details:
/// - `Left`/`Right` switch tabs, `Tab`/`Down` and `BackTab`/`Up` move between fields,
///   `Enter` submits the active tab. Nothing is validated locally.
fn handle_auth_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    let active = match &app.modal {
        Modal::Auth { tab, .. } => *tab,
        _ => return,
    };
    if ke.code == KeyCode::Enter {
        match active {
            AuthTab::SignIn => submit_login(app, req_tx),
            AuthTab::SignUp => submit_signup(app, req_tx),
        }
        return;
    }
    let Modal::Auth {
        tab,
        signin,
        signup,
    } = &mut app.modal
    else {
        return;
    };
    match ke.code {
        KeyCode::Left | KeyCode::Right => *tab = tab.toggled(),
        KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
            let forward = matches!(ke.code, KeyCode::Tab | KeyCode::Down);
            match tab {
                AuthTab::SignIn => {
                    signin.focus = step_field(signin.focus, SignInForm::FIELDS, forward);
                }
                AuthTab::SignUp => {
                    signup.focus = step_field(signup.focus, SignUpForm::FIELDS, forward);
                }
            }
        }
        KeyCode::Backspace => match tab {
            AuthTab::SignIn => signin.pop(),
            AuthTab::SignUp => signup.pop(),
        },
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => match tab {
            AuthTab::SignIn => signin.push(ch),
            AuthTab::SignUp => signup.push(ch),
        },
        _ => {}
    }
}

/// What: Handle keys in the preferences dialog.
///
/// Details:
/// - `Up`/`Down` move the cursor, `Space` toggles the row (skin type is a radio group),
///   digits and `.` edit the budget rows, `Enter` validates and submits.
fn handle_preferences_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    if ke.code == KeyCode::Enter {
        submit_preferences(app, req_tx);
        return;
    }
    let Modal::Preferences { form } = &mut app.modal else {
        return;
    };
    match ke.code {
        KeyCode::Up | KeyCode::BackTab => form.move_cursor(-1),
        KeyCode::Down | KeyCode::Tab => form.move_cursor(1),
        KeyCode::PageUp => form.move_cursor(-PAGE_ROWS),
        KeyCode::PageDown => form.move_cursor(PAGE_ROWS),
        KeyCode::Char(' ') => form.toggle_current(),
        KeyCode::Char(ch) => {
            form.push_budget_char(ch);
        }
        KeyCode::Backspace => form.pop_budget_char(),
        _ => {}
    }
}

/// What: Scroll or close the history dialog.
fn handle_history_key(ke: KeyEvent, app: &mut AppState) {
    let Modal::History { scroll, .. } = &mut app.modal else {
        return;
    };
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(PAGE_LINES),
        KeyCode::PageDown => *scroll = scroll.saturating_add(PAGE_LINES),
        KeyCode::Enter | KeyCode::Char('q') => app.close_modal(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AlertSlot, PreferenceForm, RemoteRequest, Session, UserIdentity};
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut AppState, tx: &RequestSender, text: &str) {
        for ch in text.chars() {
            handle_modal_key(key(KeyCode::Char(ch)), app, tx);
        }
    }

    #[test]
    /// What: Typing fills sign-in fields in order and Enter sends the login request.
    fn sign_in_form_submits_credentials() {
        let mut app = AppState::default();
        app.open_auth(AuthTab::SignIn);
        let (tx, mut rx) = mpsc::unbounded_channel();
        type_text(&mut app, &tx, "ada@example.com");
        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        type_text(&mut app, &tx, "hunter22");
        handle_modal_key(key(KeyCode::Backspace), &mut app, &tx);
        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        match rx.try_recv() {
            Ok(RemoteRequest::Login { email, password }) => {
                assert_eq!(email, "ada@example.com");
                assert_eq!(password.expose(), "hunter2");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    /// What: Switching to the sign-up tab routes typing and Enter to the sign-up form.
    fn sign_up_tab_submits_signup() {
        let mut app = AppState::default();
        app.open_auth(AuthTab::SignIn);
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_modal_key(key(KeyCode::Right), &mut app, &tx);
        type_text(&mut app, &tx, "Ada");
        handle_modal_key(key(KeyCode::Down), &mut app, &tx);
        type_text(&mut app, &tx, "ada@example.com");
        handle_modal_key(key(KeyCode::Down), &mut app, &tx);
        type_text(&mut app, &tx, "pw");
        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        match rx.try_recv() {
            Ok(RemoteRequest::Signup { name, email, .. }) => {
                assert_eq!(name, "Ada");
                assert_eq!(email, "ada@example.com");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    /// What: Space selects a skin type and Enter then submits the profile.
    fn preferences_toggle_and_submit() {
        let mut app = AppState {
            session: Some(Session::new(UserIdentity {
                id: 2,
                name: "Katherine".into(),
                email: "k@example.com".into(),
            })),
            ..AppState::default()
        };
        app.open_preferences();
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(app.alert(AlertSlot::Preferences).is_some());

        handle_modal_key(key(KeyCode::Down), &mut app, &tx);
        handle_modal_key(key(KeyCode::Char(' ')), &mut app, &tx);
        let Modal::Preferences { form } = &app.modal else {
            panic!("preferences should stay open");
        };
        assert_eq!(form.skin_type.as_deref(), Some("dry"));

        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(matches!(rx.try_recv(), Ok(RemoteRequest::SubmitProfile(_))));
    }

    #[test]
    /// What: Digits edit the budget row under the cursor and letters are ignored there.
    fn preferences_budget_editing() {
        let mut app = AppState {
            modal: Modal::Preferences {
                form: PreferenceForm::default(),
            },
            ..AppState::default()
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        let budget_row = PreferenceForm::rows()
            .iter()
            .position(|r| *r == crate::state::PreferenceRow::BudgetMin)
            .expect("budget row present");
        for _ in 0..budget_row {
            handle_modal_key(key(KeyCode::Down), &mut app, &tx);
        }
        handle_modal_key(key(KeyCode::Backspace), &mut app, &tx);
        handle_modal_key(key(KeyCode::Backspace), &mut app, &tx);
        type_text(&mut app, &tx, "2x5");
        let Modal::Preferences { form } = &app.modal else {
            panic!("preferences should stay open");
        };
        assert_eq!(form.budget_min, "25");
    }

    #[test]
    /// What: History scrolls without underflow and Enter closes it.
    fn history_scroll_and_close() {
        let mut app = AppState {
            modal: Modal::History {
                entries: Vec::new(),
                scroll: 0,
            },
            ..AppState::default()
        };
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_modal_key(key(KeyCode::Up), &mut app, &tx);
        handle_modal_key(key(KeyCode::PageDown), &mut app, &tx);
        assert!(matches!(app.modal, Modal::History { scroll: 10, .. }));
        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
    }
}
