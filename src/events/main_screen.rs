//! Search bar and card list keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{RequestSender, begin_search, find_best_price};
use crate::state::{AppState, Focus, ViewState};

/// What: Handle a key on the main screen (no dialog open).
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `req_tx`: Request channel
///
/// Details:
/// - Search focus: typing edits the query, `Enter` searches, `Tab`/`Down` move to the cards.
/// - Results focus: `Up`/`Down` (or `k`/`j`) move the selection, `Enter` on a
///   recommendation finds its best price, `Tab`/`/` return to the search bar.
pub fn handle_main_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    match app.focus {
        Focus::Search => handle_search_key(ke, app, req_tx),
        Focus::Results => handle_results_key(ke, app, req_tx),
    }
}

fn handle_search_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    match ke.code {
        KeyCode::Enter => {
            begin_search(app, req_tx);
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Tab | KeyCode::Down if app.visible_len() > 0 => {
            app.focus = Focus::Results;
            app.move_selection(0);
        }
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(ch);
        }
        _ => {}
    }
}

fn handle_results_key(ke: KeyEvent, app: &mut AppState, req_tx: &RequestSender) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-5),
        KeyCode::PageDown => app.move_selection(5),
        KeyCode::Enter if app.view == ViewState::Recommendations => {
            find_best_price(app, req_tx);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') | KeyCode::Esc => {
            app.focus = Focus::Search;
        }
        _ => {}
    }
}
