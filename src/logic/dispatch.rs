use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::logic::preferences::profile_from_form;
use crate::state::{
    AlertKind, AlertSlot, AppState, AuthTab, Focus, FollowUp, Modal, RemoteRequest, SearchQuery,
    ViewState,
};

/// Sender half used by the UI to queue remote work.
pub type RequestSender = mpsc::UnboundedSender<RemoteRequest>;

/// What: Queue a session refresh.
///
/// Inputs:
/// - `req_tx`: Request channel.
/// - `follow_up`: What to do once identity and profile are known.
pub fn refresh_session(req_tx: &RequestSender, follow_up: FollowUp) {
    let _ = req_tx.send(RemoteRequest::RefreshSession { follow_up });
}

/// What: Start a deal search for the text in the search bar.
///
/// Inputs:
/// - `app`: Mutable application state; switches to the Loading panel.
/// - `req_tx`: Request channel.
///
/// Output:
/// - `true` when a request was sent; `false` for a blank query, in which case
///   neither the view nor anything else changes.
pub fn begin_search(app: &mut AppState, req_tx: &RequestSender) -> bool {
    let text = app.input.trim().to_string();
    if text.is_empty() {
        return false;
    }
    info!(query = %text, use_location = app.use_location, "search started");
    app.view = ViewState::Loading;
    app.list_state.select(None);
    let _ = req_tx.send(RemoteRequest::Search(SearchQuery {
        text,
        use_location: app.use_location,
        max_results: app.max_results,
    }));
    true
}

/// What: Search deals for the highlighted recommendation ("find best price").
///
/// Inputs:
/// - `app`: Mutable application state showing recommendations.
/// - `req_tx`: Request channel.
///
/// Output:
/// - `true` when a search was started.
///
/// Details:
/// - The name is copied into the search bar first, so the search reads exactly
///   like one typed by the user. Empty names and the literal `undefined` are ignored.
pub fn find_best_price(app: &mut AppState, req_tx: &RequestSender) -> bool {
    let Some(name) = app
        .selected_recommendation()
        .map(|r| r.display_name().to_string())
    else {
        return false;
    };
    if name.trim().is_empty() || name == "undefined" {
        debug!("ignoring best-price lookup without a product name");
        return false;
    }
    app.input = name;
    app.focus = Focus::Search;
    begin_search(app, req_tx)
}

/// What: Submit the sign-in form.
///
/// Inputs:
/// - `app`: Application state with the auth dialog open.
/// - `req_tx`: Request channel.
pub fn submit_login(app: &AppState, req_tx: &RequestSender) {
    if let Modal::Auth { signin, .. } = &app.modal {
        info!("login submitted");
        let _ = req_tx.send(RemoteRequest::Login {
            email: signin.email.trim().to_string(),
            password: signin.password.clone(),
        });
    }
}

/// What: Submit the sign-up form.
///
/// Inputs:
/// - `app`: Application state with the auth dialog open.
/// - `req_tx`: Request channel.
pub fn submit_signup(app: &AppState, req_tx: &RequestSender) {
    if let Modal::Auth { signup, .. } = &app.modal {
        info!("signup submitted");
        let _ = req_tx.send(RemoteRequest::Signup {
            name: signup.name.trim().to_string(),
            email: signup.email.trim().to_string(),
            password: signup.password.clone(),
        });
    }
}

/// What: Validate and submit the preferences form.
///
/// Inputs:
/// - `app`: Mutable application state with the preferences dialog open.
/// - `req_tx`: Request channel.
///
/// Output:
/// - `true` when a request was sent.
///
/// Details:
/// - Without a skin type an error is shown in the preferences slot and nothing is sent.
/// - Without a session the auth dialog opens on the sign-up tab instead.
pub fn submit_preferences(app: &mut AppState, req_tx: &RequestSender) -> bool {
    let Some(user_id) = app.session.as_ref().map(|s| s.user.id) else {
        app.open_auth(AuthTab::SignUp);
        return false;
    };
    let Modal::Preferences { form } = &app.modal else {
        return false;
    };
    match profile_from_form(form, user_id) {
        Ok(profile) => {
            info!(user_id, skin_type = ?profile.skin_type, "preferences submitted");
            let _ = req_tx.send(RemoteRequest::SubmitProfile(profile));
            true
        }
        Err(err) => {
            app.show_alert(AlertSlot::Preferences, AlertKind::Error, err.user_message());
            false
        }
    }
}

/// What: Request logout when a session exists.
pub fn request_logout(app: &AppState, req_tx: &RequestSender) {
    if app.is_logged_in() {
        info!("logout requested");
        let _ = req_tx.send(RemoteRequest::Logout);
    }
}

/// What: Load recommendation history for the logged-in user.
///
/// Details:
/// - Guests get the sign-in dialog instead.
pub fn request_history(app: &mut AppState, req_tx: &RequestSender) {
    match app.session.as_ref().map(|s| s.user.id) {
        Some(user_id) => {
            let _ = req_tx.send(RemoteRequest::FetchHistory { user_id });
        }
        None => app.open_auth(AuthTab::SignIn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PreferenceForm, Recommendation, Session, UserIdentity};

    fn logged_in() -> AppState {
        AppState {
            session: Some(Session::new(UserIdentity {
                id: 9,
                name: "Grace Hopper".into(),
                email: "grace@example.com".into(),
            })),
            ..AppState::default()
        }
    }

    #[test]
    /// What: A blank query sends nothing and leaves the view alone.
    fn begin_search_blank_query_is_noop() {
        let mut app = AppState {
            input: "   ".into(),
            view: ViewState::Results,
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!begin_search(&mut app, &tx));
        assert_eq!(app.view, ViewState::Results);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: A real query switches to Loading and sends the trimmed text with toggles.
    fn begin_search_sends_trimmed_query() {
        let mut app = AppState {
            input: "  vitamin c serum ".into(),
            use_location: true,
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(begin_search(&mut app, &tx));
        assert_eq!(app.view, ViewState::Loading);
        match rx.try_recv() {
            Ok(RemoteRequest::Search(q)) => {
                assert_eq!(q.text, "vitamin c serum");
                assert!(q.use_location);
                assert_eq!(q.max_results, 12);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    /// What: Find-best-price copies the name into the search bar; `undefined` is ignored.
    fn find_best_price_uses_display_name() {
        let mut app = AppState {
            view: ViewState::Recommendations,
            recommendations: vec![Recommendation {
                name: Some("Barrier Cream".into()),
                ..Recommendation::default()
            }],
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(find_best_price(&mut app, &tx));
        assert_eq!(app.input, "Barrier Cream");
        assert!(matches!(rx.try_recv(), Ok(RemoteRequest::Search(_))));

        let mut app = AppState {
            view: ViewState::Recommendations,
            recommendations: vec![Recommendation {
                name: Some("undefined".into()),
                ..Recommendation::default()
            }],
            ..AppState::default()
        };
        assert!(!find_best_price(&mut app, &tx));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Submitting preferences without a skin type never reaches the network.
    fn submit_preferences_requires_skin_type() {
        let mut app = logged_in();
        app.modal = Modal::Preferences {
            form: PreferenceForm::default(),
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!submit_preferences(&mut app, &tx));
        assert!(rx.try_recv().is_err());
        let alert = app.alert(AlertSlot::Preferences).expect("alert shown");
        assert_eq!(alert.message, "Please select a skin type");
        assert_eq!(alert.kind, AlertKind::Error);
    }

    #[test]
    /// What: A valid form sends one profile submission tagged with the user id.
    fn submit_preferences_sends_profile() {
        let mut app = logged_in();
        app.modal = Modal::Preferences {
            form: PreferenceForm {
                skin_type: Some("normal".into()),
                ..PreferenceForm::default()
            },
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(submit_preferences(&mut app, &tx));
        match rx.try_recv() {
            Ok(RemoteRequest::SubmitProfile(p)) => {
                assert_eq!(p.user_id, Some(9));
                assert_eq!(p.budget_min, Some(10.0));
                assert_eq!(p.budget_max, Some(100.0));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    /// What: Guests asking for history or logout get the auth dialog or nothing.
    fn guest_history_and_logout() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        request_logout(&app, &tx);
        request_history(&mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(matches!(
            app.modal,
            Modal::Auth {
                tab: AuthTab::SignIn,
                ..
            }
        ));
    }
}
