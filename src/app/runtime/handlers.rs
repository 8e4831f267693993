use std::time::Instant;

use crate::state::{AlertKind, AlertSlot, AppState, AuthTab, Modal, Outcome, ViewState};

/// Slot that shows alerts for an auth tab.
const fn auth_slot(tab: AuthTab) -> AlertSlot {
    match tab {
        AuthTab::SignIn => AlertSlot::Login,
        AuthTab::SignUp => AlertSlot::Signup,
    }
}

/// What: Apply one worker outcome to the application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `outcome`: Result reported by a remote worker
///
/// Output: None (side effect: updates session, panels, dialogs, and alerts)
///
/// Details:
/// - Outcomes are applied in arrival order.
/// - Profile, recommendation and history results are dropped once the session
///   that requested them is gone or belongs to another user.
pub fn handle_outcome(app: &mut AppState, outcome: Outcome) {
    match outcome {
        Outcome::SessionResolved(user) => app.apply_identity(user),
        Outcome::ProfileLoaded(profile) => {
            let other_user = profile
                .as_ref()
                .and_then(|p| p.user_id)
                .is_some_and(|id| !app.owns_result(Some(id)));
            if app.is_logged_in() && !other_user {
                app.set_profile(profile);
            }
        }
        Outcome::AuthAccepted { tab, message } => {
            app.show_alert(auth_slot(tab), AlertKind::Success, message);
        }
        Outcome::AuthRejected { tab, message } => {
            app.show_alert(auth_slot(tab), AlertKind::Error, message);
        }
        Outcome::AuthFinished => {
            if matches!(app.modal, Modal::Auth { .. }) {
                app.close_modal();
            }
        }
        Outcome::PromptPreferences { once } => prompt_preferences(app, once),
        Outcome::LoggedOut => app.logout_reset(),
        Outcome::LogoutFailed(message) => {
            app.show_alert(AlertSlot::Status, AlertKind::Error, message);
        }
        Outcome::ProfileSaved(profile) => {
            if app.owns_result(profile.user_id) {
                app.set_profile(Some(profile));
            } else {
                tracing::debug!(user_id = ?profile.user_id, "dropping profile for a closed session");
            }
        }
        Outcome::ProfileSaveFailed(message) | Outcome::RecommendationsFailed(message) => {
            app.show_alert(app.preferences_alert_slot(), AlertKind::Error, message);
        }
        Outcome::RecommendationsReady { user_id, list } => {
            if !app.owns_result(user_id) {
                tracing::debug!(?user_id, "dropping recommendations for a closed session");
                return;
            }
            if app.render_recommendations(list)
                && matches!(app.modal, Modal::Preferences { .. })
            {
                app.close_modal();
            }
        }
        Outcome::SearchCompleted {
            query,
            deals,
            insights,
        } => app.render_deals(&query, deals, insights),
        Outcome::SearchFailed { query } => {
            tracing::debug!(query = %query, "showing empty panel after failed search");
            app.view = ViewState::Empty;
            app.list_state.select(None);
        }
        Outcome::HistoryLoaded { user_id, entries } => {
            if app.owns_result(Some(user_id)) {
                app.modal = Modal::History { entries, scroll: 0 };
            }
        }
        Outcome::HistoryFailed(message) => {
            app.show_alert(AlertSlot::Status, AlertKind::Error, message);
        }
    }
}

/// What: Open the preferences dialog in response to a post-auth prompt.
///
/// Details:
/// - `once` prompts are skipped when this session was already prompted or a
///   profile arrived in the meantime.
/// - Guests are never prompted.
fn prompt_preferences(app: &mut AppState, once: bool) {
    if once {
        if app.profile.is_some() {
            return;
        }
        let Some(session) = app.session.as_mut() else {
            return;
        };
        if session.preferences_prompted {
            return;
        }
        session.preferences_prompted = true;
    } else if !app.is_logged_in() {
        return;
    }
    app.open_preferences();
}

/// What: Periodic housekeeping driven by the tick worker.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Details:
/// - Auto-dismisses expired inline alerts.
pub fn handle_tick(app: &mut AppState) {
    if app.expire_alerts(Instant::now()) {
        tracing::trace!("expired inline alerts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        Deal, PreferenceProfile, Recommendation, Session, SignInForm, SignUpForm, UserIdentity,
    };

    fn user(id: i64) -> UserIdentity {
        UserIdentity {
            id,
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        }
    }

    fn oily() -> PreferenceProfile {
        PreferenceProfile {
            user_id: Some(1),
            skin_type: Some("oily".into()),
            ..PreferenceProfile::default()
        }
    }

    fn gel_cleanser() -> Recommendation {
        Recommendation {
            name: Some("Gel Cleanser".into()),
            ..Recommendation::default()
        }
    }

    fn auth_modal() -> Modal {
        Modal::Auth {
            tab: AuthTab::SignIn,
            signin: SignInForm::default(),
            signup: SignUpForm::default(),
        }
    }

    #[test]
    /// What: A resolved identity installs a session; a guest result clears it.
    fn session_resolution_round() {
        let mut app = AppState::default();
        handle_outcome(&mut app, Outcome::SessionResolved(Some(user(1))));
        handle_outcome(&mut app, Outcome::ProfileLoaded(Some(oily())));
        assert!(app.is_logged_in());
        assert_eq!(app.profile_skin_type(), Some("oily"));

        handle_outcome(&mut app, Outcome::SessionResolved(None));
        assert!(app.session.is_none());
        assert!(app.profile.is_none());
    }

    #[test]
    /// What: A profile arriving after the session was cleared is ignored.
    fn late_profile_for_guest_is_dropped() {
        let mut app = AppState::default();
        handle_outcome(&mut app, Outcome::ProfileLoaded(Some(oily())));
        assert!(app.profile.is_none());
    }

    #[test]
    /// What: Auth outcomes show alerts in the tab's slot and finishing closes the dialog.
    fn auth_alerts_and_close() {
        let mut app = AppState {
            modal: auth_modal(),
            ..AppState::default()
        };
        handle_outcome(
            &mut app,
            Outcome::AuthRejected {
                tab: AuthTab::SignIn,
                message: "Invalid email or password".into(),
            },
        );
        let alert = app.alert(AlertSlot::Login).expect("login alert");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "Invalid email or password");

        handle_outcome(
            &mut app,
            Outcome::AuthAccepted {
                tab: AuthTab::SignUp,
                message: "Account created".into(),
            },
        );
        assert_eq!(
            app.alert(AlertSlot::Signup).map(|a| a.kind),
            Some(AlertKind::Success)
        );
        handle_outcome(&mut app, Outcome::AuthFinished);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: The one-time prompt opens preferences once per session and never with a profile.
    fn one_time_prompt_fires_once() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::PromptPreferences { once: true });
        assert!(matches!(app.modal, Modal::Preferences { .. }));

        app.close_modal();
        handle_outcome(&mut app, Outcome::PromptPreferences { once: true });
        assert_eq!(app.modal, Modal::None);

        let mut with_profile = AppState {
            session: Some(Session::new(user(1))),
            profile: Some(oily()),
            ..AppState::default()
        };
        handle_outcome(&mut with_profile, Outcome::PromptPreferences { once: true });
        assert_eq!(with_profile.modal, Modal::None);
    }

    #[test]
    /// What: The signup prompt always opens preferences, even after an earlier prompt.
    fn signup_prompt_always_opens() {
        let mut session = Session::new(user(1));
        session.preferences_prompted = true;
        let mut app = AppState {
            session: Some(session),
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::PromptPreferences { once: false });
        assert!(matches!(app.modal, Modal::Preferences { .. }));

        let mut guest = AppState::default();
        handle_outcome(&mut guest, Outcome::PromptPreferences { once: false });
        assert_eq!(guest.modal, Modal::None);
    }

    #[test]
    /// What: Recommendations close the dialog; an empty list keeps it open with an error.
    fn recommendations_ready_paths() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        app.open_preferences();
        handle_outcome(
            &mut app,
            Outcome::RecommendationsReady {
                user_id: Some(1),
                list: Vec::new(),
            },
        );
        assert!(matches!(app.modal, Modal::Preferences { .. }));
        assert_eq!(app.view, ViewState::Empty);
        assert!(app.alert(AlertSlot::Preferences).is_some());

        handle_outcome(
            &mut app,
            Outcome::RecommendationsReady {
                user_id: Some(1),
                list: vec![gel_cleanser()],
            },
        );
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.view, ViewState::Recommendations);
    }

    #[test]
    /// What: Search outcomes switch between Results and Empty.
    fn search_outcomes_switch_panels() {
        let mut app = AppState {
            view: ViewState::Loading,
            ..AppState::default()
        };
        handle_outcome(
            &mut app,
            Outcome::SearchCompleted {
                query: "laptop".into(),
                deals: vec![Deal {
                    product_name: "Laptop".into(),
                    price: Some(499.0),
                    ..Deal::default()
                }],
                insights: Some("Prices are low this week".into()),
            },
        );
        assert_eq!(app.view, ViewState::Results);
        assert_eq!(app.deals.len(), 1);
        assert_eq!(app.insights.as_deref(), Some("Prices are low this week"));

        app.view = ViewState::Loading;
        handle_outcome(
            &mut app,
            Outcome::SearchFailed {
                query: "laptop".into(),
            },
        );
        assert_eq!(app.view, ViewState::Empty);
    }

    #[test]
    /// What: Logout resets to guest and the Empty panel; a failure only shows an alert.
    fn logout_outcomes() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            profile: Some(oily()),
            view: ViewState::Recommendations,
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::LogoutFailed("Network error".into()));
        assert!(app.is_logged_in());
        assert!(app.alert(AlertSlot::Status).is_some());

        handle_outcome(&mut app, Outcome::LoggedOut);
        assert!(!app.is_logged_in());
        assert!(app.profile.is_none());
        assert_eq!(app.view, ViewState::Empty);
    }

    #[test]
    /// What: Loaded history opens the history dialog at the top.
    fn history_loaded_opens_dialog() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        handle_outcome(
            &mut app,
            Outcome::HistoryLoaded {
                user_id: 1,
                entries: Vec::new(),
            },
        );
        assert!(matches!(app.modal, Modal::History { scroll: 0, .. }));
    }

    /// Outcomes of a profile submission and history load made by user 1.
    fn user_one_results() -> Vec<Outcome> {
        vec![
            Outcome::ProfileSaved(oily()),
            Outcome::RecommendationsReady {
                user_id: Some(1),
                list: vec![gel_cleanser()],
            },
            Outcome::HistoryLoaded {
                user_id: 1,
                entries: Vec::new(),
            },
        ]
    }

    #[test]
    /// What: Results finishing after logout leave the guest state untouched.
    ///
    /// Inputs:
    /// - Logout, then a saved profile, recommendations and history for the old user.
    ///
    /// Output:
    /// - No profile, no match toggle, Empty panel, no dialog.
    fn results_after_logout_are_dropped() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::LoggedOut);
        for outcome in user_one_results() {
            handle_outcome(&mut app, outcome);
        }
        assert!(!app.is_logged_in());
        assert!(app.profile.is_none());
        assert!(!app.match_toggle_available());
        assert!(app.recommendations.is_empty());
        assert_eq!(app.view, ViewState::Empty);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Results for the previous user are not installed for the next one.
    ///
    /// Inputs:
    /// - Logout, user 2 signs in with no profile, then user 1's results arrive.
    ///
    /// Output:
    /// - User 2 keeps no profile and sees neither recommendations nor history.
    fn results_for_previous_user_are_dropped() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::LoggedOut);
        handle_outcome(&mut app, Outcome::SessionResolved(Some(user(2))));
        handle_outcome(&mut app, Outcome::ProfileLoaded(None));
        for outcome in user_one_results() {
            handle_outcome(&mut app, outcome);
        }
        handle_outcome(&mut app, Outcome::ProfileLoaded(Some(oily())));
        assert_eq!(app.session.as_ref().map(|s| s.user.id), Some(2));
        assert!(app.profile.is_none());
        assert!(app.recommendations.is_empty());
        assert_eq!(app.view, ViewState::Empty);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Preference failures land on the status line once the dialog is closed.
    ///
    /// Details:
    /// - Reopening the dialog must not erase the status alert.
    fn preference_failures_without_dialog_use_status() {
        let mut app = AppState {
            session: Some(Session::new(user(1))),
            ..AppState::default()
        };
        handle_outcome(&mut app, Outcome::ProfileSaveFailed("save failed".into()));
        assert_eq!(
            app.alert(AlertSlot::Status).map(|a| a.message.as_str()),
            Some("save failed")
        );
        assert!(app.alert(AlertSlot::Preferences).is_none());

        handle_outcome(
            &mut app,
            Outcome::RecommendationsReady {
                user_id: Some(1),
                list: Vec::new(),
            },
        );
        app.open_preferences();
        assert_eq!(
            app.alert(AlertSlot::Status).map(|a| a.message.as_str()),
            Some("No recommendations found. Try adjusting your preferences.")
        );

        handle_outcome(&mut app, Outcome::RecommendationsFailed("no list".into()));
        assert_eq!(
            app.alert(AlertSlot::Preferences).map(|a| a.message.as_str()),
            Some("no list")
        );
    }
}
