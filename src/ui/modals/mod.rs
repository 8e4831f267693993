use ratatui::{Frame, prelude::Rect};

use crate::state::{AppState, Modal};

mod auth;
mod common;
mod history;
mod preferences;

/// What: Draw the open dialog, if any, over the main screen.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state
/// - `area`: Full screen area used to center the dialog
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Auth {
            tab,
            signin,
            signup,
        } => auth::render_auth(f, app, area, *tab, signin, signup),
        Modal::Preferences { form } => preferences::render_preferences(f, app, area, form),
        Modal::History { entries, scroll } => history::render_history(f, area, entries, *scroll),
    }
}
