use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_outcome, handle_tick};

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.request_tx)
        }
        Some(outcome) = channels.outcome_rx.recv() => {
            tracing::debug!(?outcome, "[Runtime] outcome received");
            handle_outcome(app, outcome);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering the UI between messages.
///
/// Inputs:
/// - `terminal`: Terminal to draw into
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: None (runs until the quit key is pressed)
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        let _ = terminal.draw(|f| ui(f, app));

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
