//! JSON request and response bodies of the backend endpoints.

use serde::{Deserialize, Serialize};

use crate::state::{Deal, HistoryEntry, Recommendation, UserIdentity};

/// Body of `GET /current-user`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct CurrentUserResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// Body of `POST /login`, `/signup`, and `/logout`, whatever the status code.
#[derive(Debug, Default, Deserialize)]
pub(super) struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub(super) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(super) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /skincare/recommend`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Serialize)]
pub(super) struct SearchRequest<'a> {
    pub product_name: &'a str,
    pub use_location: bool,
    pub max_results: u32,
}

/// Body of `POST /deals/api/search`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchData {
    #[serde(default)]
    pub all_deals: Option<Vec<Deal>>,
    #[serde(default)]
    pub gpt_insights: Option<String>,
}

/// Body of `GET /skincare/history/{id}`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}
