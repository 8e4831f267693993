//! Remote sync workers: one spawned task per `RemoteRequest`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::sources::{Backend, SyncError};
use crate::state::{Outcome, RemoteRequest};
use crate::theme::Settings;

/// Preference save and history workers.
pub mod profile;
/// Deal search worker.
pub mod search;
/// Identity, login, signup, and logout workers.
pub mod session;

/// Sender half used by workers to report back.
pub type OutcomeSender = mpsc::UnboundedSender<Outcome>;

/// What: Fixed delays used around login and signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Delay between auth success and the session refresh.
    pub login_refresh_delay: Duration,
    /// Delay between the post-login refresh and the preferences prompt.
    pub prompt_delay: Duration,
}

impl Timing {
    /// Delays configured in `settings.conf`.
    #[must_use]
    pub const fn from_settings(settings: &Settings) -> Self {
        Self {
            login_refresh_delay: Duration::from_millis(settings.login_refresh_delay_ms),
            prompt_delay: Duration::from_millis(settings.prompt_delay_ms),
        }
    }

    /// No delays (tests and one-shot mode).
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            login_refresh_delay: Duration::ZERO,
            prompt_delay: Duration::ZERO,
        }
    }
}

/// What: Spawn the worker that turns requests into spawned remote tasks.
///
/// Inputs:
/// - `request_rx`: Requests queued by the UI.
/// - `outcome_tx`: Where results are reported.
/// - `backend`: Shared backend implementation.
/// - `timing`: Login/prompt delays.
///
/// Details:
/// - Each request runs in its own task, so a slow search never blocks a login.
/// - Nothing is cancelled; a stale search can finish after a newer one.
pub fn spawn_remote_worker<B: Backend>(
    mut request_rx: mpsc::UnboundedReceiver<RemoteRequest>,
    outcome_tx: OutcomeSender,
    backend: Arc<B>,
    timing: Timing,
) {
    tokio::spawn(async move {
        while let Some(req) = request_rx.recv().await {
            let backend = Arc::clone(&backend);
            let out = outcome_tx.clone();
            tokio::spawn(async move {
                run_request(backend.as_ref(), req, &out, timing).await;
            });
        }
        tracing::debug!("[Worker] request channel closed");
    });
}

/// What: Execute one request against the backend and report its outcomes.
///
/// Inputs:
/// - `backend`: Backend implementation.
/// - `req`: Request to run.
/// - `out`: Outcome channel.
/// - `timing`: Login/prompt delays.
///
/// Output:
/// - None; every result, including failures, is reported through `out`.
pub async fn run_request<B: Backend>(
    backend: &B,
    req: RemoteRequest,
    out: &OutcomeSender,
    timing: Timing,
) {
    match req {
        RemoteRequest::RefreshSession { follow_up } => {
            session::refresh_then(backend, out, follow_up, timing).await;
        }
        RemoteRequest::Login { email, password } => {
            session::login(backend, &email, &password, out, timing).await;
        }
        RemoteRequest::Signup {
            name,
            email,
            password,
        } => {
            session::signup(backend, &name, &email, &password, out, timing).await;
        }
        RemoteRequest::Logout => session::logout(backend, out).await,
        RemoteRequest::SubmitProfile(profile) => {
            profile::submit_profile(backend, profile, out).await;
        }
        RemoteRequest::Search(query) => search::search(backend, query, out).await,
        RemoteRequest::FetchHistory { user_id } => {
            profile::history(backend, user_id, out).await;
        }
    }
}

/// What: Log a failed remote call at a level matching its kind.
///
/// Details:
/// - Server rejections are expected user-facing outcomes and log at info;
///   transport and decode failures log at warn with the diagnostic detail.
pub(crate) fn log_failure(operation: &str, err: &SyncError) {
    match err {
        SyncError::Validation(_) | SyncError::Rejected(_) => {
            tracing::info!(operation, error = %err, "remote call rejected");
        }
        SyncError::Transport(_) | SyncError::Decode(_) => {
            tracing::warn!(operation, error = %err, "remote call failed");
        }
    }
}
