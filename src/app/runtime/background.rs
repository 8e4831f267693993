use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between UI ticks.
const TICK_MS: u64 = 200;

/// What: Spawn a thread that forwards terminal events into the event channel.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events.
/// - `cancelled`: Flag checked between polls; set on exit.
///
/// Details:
/// - Polls with a 50ms timeout so the thread notices cancellation promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Spawn the tick worker that drives alert expiry and redraws.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}
