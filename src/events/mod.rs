//! Event handling layer for the skindeals TUI.
//!
//! `handle_event` routes a key press to global shortcuts, the open dialog, or
//! the main screen. Handlers mutate `AppState` and queue `RemoteRequest`s; they
//! never wait on the network.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::logic::RequestSender;
use crate::state::{AppState, Modal};

mod global;
mod main_screen;
mod modals;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState, req_tx: &RequestSender) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if let Some(quit) = global::handle_global_key(*ke, app, req_tx) {
        return quit;
    }
    if matches!(app.modal, Modal::None) {
        main_screen::handle_main_key(*ke, app, req_tx);
    } else {
        modals::handle_modal_key(*ke, app, req_tx);
    }
    false
}
