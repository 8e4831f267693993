//! Command-line one-shot search.

use std::fmt::Write;

use tokio::sync::mpsc;

use crate::app::runtime::handle_outcome;
use crate::app::runtime::workers::{Timing, run_request, session};
use crate::logic::begin_search;
use crate::sources::{Backend, HttpBackend};
use crate::state::{AppState, Outcome, Secret, ViewState};
use crate::theme::Settings;
use crate::ui::cards::DealCard;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run one search without the TUI and print the resulting cards.
///
/// Inputs:
/// - `query`: Search text.
/// - `login`: Optional email to log in with first; the password is prompted for.
/// - `settings`: Settings with CLI overrides applied.
///
/// Output:
/// - `Ok(())` after printing; `Err` when the client cannot be built or the password
///   prompt fails.
///
/// Details:
/// - Runs the same worker and handler path as the TUI, so the relevance filter and the
///   count line match what the results panel would show.
pub async fn run_search(query: &str, login: Option<&str>, settings: &Settings) -> Result<()> {
    tracing::info!(query = %query, "Search mode requested from CLI");
    let backend = HttpBackend::new(&settings.base_url)?;
    let mut app = AppState::from_settings(settings);
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Outcome>();

    if let Some(email) = login {
        let password = Secret::new(rpassword::prompt_password(format!("Password for {email}: "))?);
        match backend.login(email, &password).await {
            Ok(message) => eprintln!("{message}"),
            Err(err) => eprintln!("{}", err.user_message()),
        }
    }
    session::refresh(&backend, &out_tx).await;
    drain(&mut app, &mut out_rx);

    app.input = query.to_string();
    let (req_tx, mut req_rx) = mpsc::unbounded_channel();
    if !begin_search(&mut app, &req_tx) {
        eprintln!("Nothing to search for.");
        return Ok(());
    }
    while let Ok(req) = req_rx.try_recv() {
        run_request(&backend, req, &out_tx, Timing::immediate()).await;
    }
    drain(&mut app, &mut out_rx);

    print!("{}", format_results(&app));
    Ok(())
}

/// Apply every queued outcome.
fn drain(app: &mut AppState, rx: &mut mpsc::UnboundedReceiver<Outcome>) {
    while let Ok(outcome) = rx.try_recv() {
        handle_outcome(app, outcome);
    }
}

/// What: Plain-text rendering of the Results panel.
///
/// Output:
/// - Header, count line, optional insights, then one block per deal; a short notice
///   when the search produced nothing to show.
#[must_use]
pub fn format_results(app: &AppState) -> String {
    if app.view != ViewState::Results {
        return "No deals found. Try a different search.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Results for \"{}\"", app.searched_query);
    let _ = writeln!(out, "{}", app.count_line);
    if let Some(insights) = &app.insights {
        let _ = writeln!(out, "\n{insights}");
    }
    for deal in &app.deals {
        let card = DealCard::from_deal(deal, &app.placeholder_image_base);
        let _ = writeln!(out, "\n{}\n  {}", card.title, card.seller);
        match &card.was {
            Some(was) => {
                let _ = writeln!(out, "  {}  ({was})", card.price);
            }
            None => {
                let _ = writeln!(out, "  {}", card.price);
            }
        }
        if !card.url.is_empty() {
            let _ = writeln!(out, "  {}", card.url);
        }
    }
    out
}
