//! Global shortcuts available regardless of focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{RequestSender, request_history, request_logout};
use crate::state::{AppState, AuthTab, Modal};

/// What: Handle shortcuts that do not depend on the focused widget.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `req_tx`: Request channel
///
/// Output:
/// - `Some(true)` to quit, `Some(false)` when the key was consumed, `None` to
///   let the dialog or main screen handle it.
///
/// Details:
/// - `Ctrl+C` quits and `Esc` closes the open dialog everywhere.
/// - The remaining shortcuts only apply while no dialog is open:
///   `Ctrl+L` sign in, `Ctrl+U` sign up, `Ctrl+O` log out, `Ctrl+P` preferences,
///   `Ctrl+R` history, `Ctrl+T` location toggle, `Ctrl+F` match-profile toggle.
pub fn handle_global_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) -> Option<bool> {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c')) {
        return Some(true);
    }
    if !matches!(app.modal, Modal::None) {
        if ke.code == KeyCode::Esc {
            app.close_modal();
            return Some(false);
        }
        return None;
    }
    if !ctrl {
        return None;
    }
    match ke.code {
        KeyCode::Char('l') if !app.is_logged_in() => app.open_auth(AuthTab::SignIn),
        KeyCode::Char('u') if !app.is_logged_in() => app.open_auth(AuthTab::SignUp),
        KeyCode::Char('o') => request_logout(app, req_tx),
        KeyCode::Char('p') => app.open_preferences(),
        KeyCode::Char('r') => request_history(app, req_tx),
        KeyCode::Char('t') => app.use_location = !app.use_location,
        KeyCode::Char('f') if app.match_toggle_available() => app.toggle_match_profile(),
        _ => return None,
    }
    Some(false)
}
