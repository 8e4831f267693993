use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{Outcome, RemoteRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used between the event loop,
///   the terminal event thread, the tick worker, and the remote worker.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver for terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// UI-to-worker requests.
    pub request_tx: mpsc::UnboundedSender<RemoteRequest>,
    /// Receiver handed to the remote worker.
    pub request_rx: Option<mpsc::UnboundedReceiver<RemoteRequest>>,
    /// Worker-to-UI outcomes.
    pub outcome_tx: mpsc::UnboundedSender<Outcome>,
    /// Receiver for outcomes.
    pub outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    /// Periodic tick.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver for ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - Fresh channel set; `request_rx` is taken once by the remote worker.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (request_tx, request_rx) = mpsc::unbounded_channel::<RemoteRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<Outcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            request_tx,
            request_rx: Some(request_rx),
            outcome_tx,
            outcome_rx,
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
