use tokio::time::sleep;
use tracing::info;

use super::{OutcomeSender, Timing, log_failure};
use crate::sources::Backend;
use crate::state::{AuthTab, FollowUp, Outcome, PreferenceProfile, Secret, UserIdentity};

/// What: Re-check identity and, when logged in, fetch the stored profile.
///
/// Inputs:
/// - `backend`: Backend implementation.
/// - `out`: Outcome channel; receives `SessionResolved` then (if logged in) `ProfileLoaded`.
///
/// Output:
/// - The identity and profile that were reported.
///
/// Details:
/// - Any identity failure is reported as guest.
/// - Any profile failure is reported as "no profile yet".
pub async fn refresh<B: Backend>(
    backend: &B,
    out: &OutcomeSender,
) -> (Option<UserIdentity>, Option<PreferenceProfile>) {
    let user = match backend.current_user().await {
        Ok(user) => user,
        Err(err) => {
            log_failure("current-user", &err);
            None
        }
    };
    info!(user_id = ?user.as_ref().map(|u| u.id), "session refreshed");
    let _ = out.send(Outcome::SessionResolved(user.clone()));
    let Some(u) = user else {
        return (None, None);
    };
    let profile = match backend.fetch_profile(u.id).await {
        Ok(p) => p,
        Err(err) => {
            log_failure("fetch-profile", &err);
            None
        }
    };
    let _ = out.send(Outcome::ProfileLoaded(profile.clone()));
    (Some(u), profile)
}

/// What: Refresh the session, then apply a follow-up.
///
/// Inputs:
/// - `follow_up`: `PromptIfMissing` waits `prompt_delay` and asks for the one-time
///   prompt when the refreshed session has no profile; `PromptAlways` asks at once.
pub async fn refresh_then<B: Backend>(
    backend: &B,
    out: &OutcomeSender,
    follow_up: FollowUp,
    timing: Timing,
) {
    let (user, profile) = refresh(backend, out).await;
    match follow_up {
        FollowUp::None => {}
        FollowUp::PromptIfMissing => {
            if user.is_some() && profile.is_none() {
                sleep(timing.prompt_delay).await;
                let _ = out.send(Outcome::PromptPreferences { once: true });
            }
        }
        FollowUp::PromptAlways => {
            let _ = out.send(Outcome::PromptPreferences { once: false });
        }
    }
}

/// What: Log in, then refresh and maybe prompt for preferences.
pub async fn login<B: Backend>(
    backend: &B,
    email: &str,
    password: &Secret,
    out: &OutcomeSender,
    timing: Timing,
) {
    authenticate(
        backend.login(email, password).await,
        AuthTab::SignIn,
        FollowUp::PromptIfMissing,
        backend,
        out,
        timing,
    )
    .await;
}

/// What: Create an account, then refresh and always open preferences.
pub async fn signup<B: Backend>(
    backend: &B,
    name: &str,
    email: &str,
    password: &Secret,
    out: &OutcomeSender,
    timing: Timing,
) {
    authenticate(
        backend.signup(name, email, password).await,
        AuthTab::SignUp,
        FollowUp::PromptAlways,
        backend,
        out,
        timing,
    )
    .await;
}

/// Shared tail of login and signup.
async fn authenticate<B: Backend>(
    result: Result<String, crate::sources::SyncError>,
    tab: AuthTab,
    follow_up: FollowUp,
    backend: &B,
    out: &OutcomeSender,
    timing: Timing,
) {
    match result {
        Ok(message) => {
            info!(?tab, "authentication accepted");
            let _ = out.send(Outcome::AuthAccepted { tab, message });
            sleep(timing.login_refresh_delay).await;
            let _ = out.send(Outcome::AuthFinished);
            refresh_then(backend, out, follow_up, timing).await;
        }
        Err(err) => {
            log_failure(
                match tab {
                    AuthTab::SignIn => "login",
                    AuthTab::SignUp => "signup",
                },
                &err,
            );
            let _ = out.send(Outcome::AuthRejected {
                tab,
                message: err.user_message().to_string(),
            });
        }
    }
}

/// What: End the session on the server.
pub async fn logout<B: Backend>(backend: &B, out: &OutcomeSender) {
    match backend.logout().await {
        Ok(()) => {
            info!("logged out");
            let _ = out.send(Outcome::LoggedOut);
        }
        Err(err) => {
            log_failure("logout", &err);
            let _ = out.send(Outcome::LogoutFailed(err.user_message().to_string()));
        }
    }
}
