use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::refresh_session;
use crate::sources::{Backend, HttpBackend};
use crate::state::{AppState, FollowUp};
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod handlers;
pub mod workers;

pub use handlers::{handle_outcome, handle_tick};

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use event_loop::run_event_loop;
use workers::{Timing, spawn_remote_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the skindeals TUI against the configured backend.
///
/// Inputs:
/// - `settings`: Loaded settings with CLI overrides applied.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal or client setup errors.
///
/// Details:
/// - Builds the cookie-carrying HTTP backend and hands over to [`run_with_backend`].
pub async fn run(settings: Settings) -> Result<()> {
    let backend = HttpBackend::new(&settings.base_url)?;
    tracing::info!(base_url = %backend.base_url(), "backend client ready");
    run_with_backend(Arc::new(backend), &settings).await
}

/// What: Run the TUI with any backend implementation.
///
/// Inputs:
/// - `backend`: Shared backend used by all remote workers.
/// - `settings`: Loaded settings.
///
/// Output:
/// - `Ok(())` on quit; `Err` when the terminal cannot be set up.
///
/// Details:
/// - Startup: enters the alternate screen, spawns the terminal reader, the tick
///   worker, and the remote worker, then queues the initial identity check.
/// - Cleanup: stops the reader thread and restores terminal modes before returning.
pub async fn run_with_backend<B: Backend>(backend: Arc<B>, settings: &Settings) -> Result<()> {
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState::from_settings(settings);
    let mut channels = Channels::new();

    if let Some(request_rx) = channels.request_rx.take() {
        spawn_remote_worker(
            request_rx,
            channels.outcome_tx.clone(),
            backend,
            Timing::from_settings(settings),
        );
    }
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_tick_worker(&channels.tick_tx);

    refresh_session(&channels.request_tx, FollowUp::None);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    restore_terminal()?;
    tracing::info!("skindeals exited");
    Ok(())
}
