//! `reqwest`-based implementation of [`Backend`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{
    AuthResponse, CurrentUserResponse, HistoryResponse, LoginRequest, RecommendResponse,
    SearchRequest, SearchResponse, SignupRequest,
};
use super::{Backend, SearchResults, SyncError};
use crate::state::{
    HistoryEntry, PreferenceProfile, Recommendation, SearchQuery, Secret, UserIdentity,
};

/// What: HTTP client for the deals/skincare backend.
///
/// Details:
/// - Keeps server-set session cookies in an in-memory cookie store for the
///   lifetime of the value, so login state carries across requests.
/// - No request timeouts are configured; a hung request simply never reports back.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// What: Build a client for a backend origin.
    ///
    /// Inputs:
    /// - `base_url`: Origin such as `http://127.0.0.1:5000`; a trailing slash is ignored.
    ///
    /// Output:
    /// - `Ok(HttpBackend)` or `Err(SyncError::Transport)` when the TLS/HTTP stack
    ///   cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(format!("skindeals/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a JSON body regardless of the status code.
    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SyncError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(%status, bytes = bytes.len(), "[HTTP] response");
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Turn an auth-style body into the success message or a rejection.
    fn auth_outcome(body: AuthResponse, fallback: &str) -> Result<String, SyncError> {
        if body.success {
            Ok(body.message.unwrap_or_default())
        } else {
            Err(SyncError::Rejected(
                body.error
                    .or(body.message)
                    .unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn current_user(&self) -> Result<Option<UserIdentity>, SyncError> {
        debug!("[HTTP] GET /current-user");
        let resp = self.client.get(self.url("/current-user")).send().await?;
        let body: CurrentUserResponse = Self::read_json(resp).await?;
        let authenticated = body.authenticated;
        Ok(body.user.filter(|_| authenticated))
    }

    async fn fetch_profile(&self, user_id: i64) -> Result<Option<PreferenceProfile>, SyncError> {
        debug!(user_id, "[HTTP] GET /skincare/profile");
        let resp = self
            .client
            .get(self.url(&format!("/skincare/profile/{user_id}")))
            .send()
            .await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "[HTTP] no stored profile");
            return Ok(None);
        }
        Ok(Some(Self::read_json(resp).await?))
    }

    async fn login(&self, email: &str, password: &Secret) -> Result<String, SyncError> {
        debug!("[HTTP] POST /login");
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest {
                email,
                password: password.expose(),
            })
            .send()
            .await?;
        Self::auth_outcome(Self::read_json(resp).await?, "Login failed")
    }

    async fn signup(&self, name: &str, email: &str, password: &Secret) -> Result<String, SyncError> {
        debug!("[HTTP] POST /signup");
        let resp = self
            .client
            .post(self.url("/signup"))
            .json(&SignupRequest {
                name,
                email,
                password: password.expose(),
            })
            .send()
            .await?;
        Self::auth_outcome(Self::read_json(resp).await?, "Signup failed")
    }

    async fn logout(&self) -> Result<(), SyncError> {
        debug!("[HTTP] POST /logout");
        let resp = self.client.post(self.url("/logout")).send().await?;
        Self::auth_outcome(Self::read_json(resp).await?, "Logout failed").map(|_| ())
    }

    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), SyncError> {
        debug!(user_id = ?profile.user_id, "[HTTP] POST /skincare/quiz");
        let resp = self
            .client
            .post(self.url("/skincare/quiz"))
            .json(profile)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SyncError::Rejected(format!("HTTP {status}")))
        }
    }

    async fn recommend(
        &self,
        profile: &PreferenceProfile,
    ) -> Result<Option<Vec<Recommendation>>, SyncError> {
        debug!(user_id = ?profile.user_id, "[HTTP] POST /skincare/recommend");
        let resp = self
            .client
            .post(self.url("/skincare/recommend"))
            .json(profile)
            .send()
            .await?;
        let body: RecommendResponse = Self::read_json(resp).await?;
        Ok(body.recommendations)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Option<SearchResults>, SyncError> {
        debug!(query = %query.text, use_location = query.use_location, max = query.max_results, "[HTTP] POST /deals/api/search");
        let resp = self
            .client
            .post(self.url("/deals/api/search"))
            .json(&SearchRequest {
                product_name: &query.text,
                use_location: query.use_location,
                max_results: query.max_results,
            })
            .send()
            .await?;
        let body: SearchResponse = Self::read_json(resp).await?;
        if !body.success {
            return Ok(None);
        }
        Ok(body.data.and_then(|d| {
            let insights = d.gpt_insights;
            d.all_deals.map(|deals| SearchResults { deals, insights })
        }))
    }

    async fn history(&self, user_id: i64) -> Result<Vec<HistoryEntry>, SyncError> {
        debug!(user_id, "[HTTP] GET /skincare/history");
        let resp = self
            .client
            .get(self.url(&format!("/skincare/history/{user_id}")))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Rejected(format!("HTTP {status}")));
        }
        let body: HistoryResponse = Self::read_json(resp).await?;
        Ok(body.history)
    }
}
