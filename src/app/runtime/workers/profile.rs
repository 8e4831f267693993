use tracing::info;

use super::{OutcomeSender, log_failure};
use crate::sources::Backend;
use crate::state::{Outcome, PreferenceProfile};

/// Shown when step (a), saving the profile, fails.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving preferences. Please try again.";
/// Shown when step (b) returns no list or fails.
pub const RECOMMEND_FAILED_MESSAGE: &str = "Failed to get recommendations";
/// Shown when history cannot be loaded.
pub const HISTORY_FAILED_MESSAGE: &str = "Could not load history";

/// What: Save the profile, then request recommendations for it.
///
/// Inputs:
/// - `backend`: Backend implementation.
/// - `profile`: Validated profile.
/// - `out`: Outcome channel.
///
/// Details:
/// - Step (b) runs only after step (a) succeeded; a failed step (b) leaves the saved
///   profile in place and no compensating call is made.
pub async fn submit_profile<B: Backend>(backend: &B, profile: PreferenceProfile, out: &OutcomeSender) {
    if let Err(err) = backend.save_profile(&profile).await {
        log_failure("save-profile", &err);
        let _ = out.send(Outcome::ProfileSaveFailed(SAVE_FAILED_MESSAGE.to_string()));
        return;
    }
    info!(user_id = ?profile.user_id, "profile saved");
    let _ = out.send(Outcome::ProfileSaved(profile.clone()));

    match backend.recommend(&profile).await {
        Ok(Some(list)) => {
            info!(count = list.len(), "recommendations received");
            let _ = out.send(Outcome::RecommendationsReady {
                user_id: profile.user_id,
                list,
            });
        }
        Ok(None) => {
            info!("recommendation response carried no list");
            let _ = out.send(Outcome::RecommendationsFailed(
                RECOMMEND_FAILED_MESSAGE.to_string(),
            ));
        }
        Err(err) => {
            log_failure("recommend", &err);
            let _ = out.send(Outcome::RecommendationsFailed(
                RECOMMEND_FAILED_MESSAGE.to_string(),
            ));
        }
    }
}

/// What: Load past recommendation runs.
pub async fn history<B: Backend>(backend: &B, user_id: i64, out: &OutcomeSender) {
    match backend.history(user_id).await {
        Ok(entries) => {
            info!(user_id, sessions = entries.len(), "history loaded");
            let _ = out.send(Outcome::HistoryLoaded { user_id, entries });
        }
        Err(err) => {
            log_failure("history", &err);
            let _ = out.send(Outcome::HistoryFailed(HISTORY_FAILED_MESSAGE.to_string()));
        }
    }
}
