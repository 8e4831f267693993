//! Shared fixtures for integration tests: a scripted backend and a canned axum server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, on};

use skindeals::app::runtime::handle_outcome;
use skindeals::sources::{Backend, SearchResults, SyncError};
use skindeals::state::{
    AppState, HistoryEntry, Outcome, PreferenceProfile, Recommendation, SearchQuery, Secret,
    UserIdentity,
};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// What: Scripted in-memory backend that records every call.
///
/// Details:
/// - A successful login or signup makes `login_as` the current user.
/// - A successful logout clears it.
pub struct FakeBackend {
    pub user: Mutex<Option<UserIdentity>>,
    pub login_as: UserIdentity,
    pub profile: Option<PreferenceProfile>,
    pub login_result: Result<String, SyncError>,
    pub signup_result: Result<String, SyncError>,
    pub logout_result: Result<(), SyncError>,
    pub save_result: Result<(), SyncError>,
    pub recommend_result: Result<Option<Vec<Recommendation>>, SyncError>,
    pub search_result: Result<Option<SearchResults>, SyncError>,
    pub history_result: Result<Vec<HistoryEntry>, SyncError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            user: Mutex::new(None),
            login_as: ada(),
            profile: None,
            login_result: Ok("Login successful".into()),
            signup_result: Ok("Account created".into()),
            logout_result: Ok(()),
            save_result: Ok(()),
            recommend_result: Ok(Some(Vec::new())),
            search_result: Ok(None),
            history_result: Ok(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

/// The user every fake login resolves to.
pub fn ada() -> UserIdentity {
    UserIdentity {
        id: 7,
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
    }
}

impl FakeBackend {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Whether any recorded call starts with `prefix`.
    pub fn called(&self, prefix: &str) -> bool {
        self.calls().iter().any(|c| c.starts_with(prefix))
    }

    fn set_user(&self, user: Option<UserIdentity>) {
        *self.user.lock().expect("user lock") = user;
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn current_user(&self) -> Result<Option<UserIdentity>, SyncError> {
        self.record("current_user");
        Ok(self.user.lock().expect("user lock").clone())
    }

    async fn fetch_profile(&self, user_id: i64) -> Result<Option<PreferenceProfile>, SyncError> {
        self.record(format!("fetch_profile:{user_id}"));
        Ok(self.profile.clone())
    }

    async fn login(&self, email: &str, _password: &Secret) -> Result<String, SyncError> {
        self.record(format!("login:{email}"));
        if self.login_result.is_ok() {
            self.set_user(Some(self.login_as.clone()));
        }
        self.login_result.clone()
    }

    async fn signup(
        &self,
        _name: &str,
        email: &str,
        _password: &Secret,
    ) -> Result<String, SyncError> {
        self.record(format!("signup:{email}"));
        if self.signup_result.is_ok() {
            self.set_user(Some(self.login_as.clone()));
        }
        self.signup_result.clone()
    }

    async fn logout(&self) -> Result<(), SyncError> {
        self.record("logout");
        if self.logout_result.is_ok() {
            self.set_user(None);
        }
        self.logout_result.clone()
    }

    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), SyncError> {
        self.record(format!(
            "save_profile:{}",
            profile.skin_type().unwrap_or_default()
        ));
        self.save_result.clone()
    }

    async fn recommend(
        &self,
        _profile: &PreferenceProfile,
    ) -> Result<Option<Vec<Recommendation>>, SyncError> {
        self.record("recommend");
        self.recommend_result.clone()
    }

    async fn search(&self, query: &SearchQuery) -> Result<Option<SearchResults>, SyncError> {
        self.record(format!("search:{}", query.text));
        self.search_result.clone()
    }

    async fn history(&self, user_id: i64) -> Result<Vec<HistoryEntry>, SyncError> {
        self.record(format!("history:{user_id}"));
        self.history_result.clone()
    }
}

/// Collect every outcome queued so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Outcome>) -> Vec<Outcome> {
    let mut out = Vec::new();
    while let Ok(o) = rx.try_recv() {
        out.push(o);
    }
    out
}

/// Apply outcomes to the state in arrival order.
pub fn apply_all(app: &mut AppState, outcomes: Vec<Outcome>) {
    for o in outcomes {
        handle_outcome(app, o);
    }
}

/// One request as seen by the canned server.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    /// Whether this was `method path`.
    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method.as_str() == method && self.path == path
    }

    /// Value of a request header, when present and valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// One canned reply for a route.
#[derive(Clone)]
pub struct Canned {
    pub method: MethodFilter,
    pub path: &'static str,
    pub status: StatusCode,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: &'static str,
}

impl Canned {
    /// JSON reply to `GET path`.
    pub fn get(path: &'static str, status: StatusCode, body: &'static str) -> Self {
        Self {
            method: MethodFilter::GET,
            path,
            status,
            headers: Vec::new(),
            body,
        }
    }

    /// JSON reply to `POST path`.
    pub fn post(path: &'static str, status: StatusCode, body: &'static str) -> Self {
        Self {
            method: MethodFilter::POST,
            ..Self::get(path, status, body)
        }
    }

    /// Add a response header (lowercase name).
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// What: Serve canned replies from an axum router and report every request it receives.
///
/// Inputs:
/// - `replies`: Replies per route, consumed in order for repeated calls to one route.
///
/// Output:
/// - Base URL of the server and a receiver yielding each captured request in arrival order.
///
/// Details:
/// - A route whose replies are used up answers `500` with an empty body.
pub async fn canned_server(replies: Vec<Canned>) -> (String, mpsc::UnboundedReceiver<Captured>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut queues: Vec<(&'static str, MethodFilter, VecDeque<Canned>)> = Vec::new();
    for reply in replies {
        match queues.iter_mut().find(|(path, _, _)| *path == reply.path) {
            Some((_, _, queue)) => queue.push_back(reply),
            None => queues.push((reply.path, reply.method, VecDeque::from([reply]))),
        }
    }

    let mut app = Router::new();
    for (path, method, queue) in queues {
        let queue = Arc::new(Mutex::new(queue));
        let tx = tx.clone();
        let handler = move |method: Method, uri: Uri, headers: HeaderMap, body: String| {
            let queue = Arc::clone(&queue);
            let tx = tx.clone();
            async move {
                let _ = tx.send(Captured {
                    method,
                    path: uri.path().to_string(),
                    headers,
                    body,
                });
                let next = queue.lock().expect("queue lock").pop_front();
                reply_with(next)
            }
        };
        app = app.route(path, on(method, handler));
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("canned server");
    });
    (format!("http://{addr}"), rx)
}

fn reply_with(canned: Option<Canned>) -> Response {
    let Some(canned) = canned else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let mut response = (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response();
    for (name, value) in canned.headers {
        response.headers_mut().append(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
