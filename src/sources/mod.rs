//! Remote sync layer: the backend contract and its HTTP implementation.

use std::fmt;

use async_trait::async_trait;

use crate::state::{
    Deal, HistoryEntry, PreferenceProfile, Recommendation, SearchQuery, Secret, UserIdentity,
};

mod client;
mod wire;

pub use client::HttpBackend;

/// Fixed message shown for transport and decode failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// What: Failure of one remote operation.
///
/// Details:
/// - `Validation` and `Rejected` carry text meant for the user.
/// - `Transport` and `Decode` carry diagnostic detail for the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Rejected locally before any request was sent.
    Validation(String),
    /// The server answered `success: false` (or a non-OK status) with a message.
    Rejected(String),
    /// The request could not be completed.
    Transport(String),
    /// The response body was not the expected JSON.
    Decode(String),
}

impl SyncError {
    /// What: Text to show inline for this failure.
    ///
    /// Output:
    /// - Validation and rejection messages verbatim; the fixed network message otherwise.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Rejected(m) => m,
            Self::Transport(_) | Self::Decode(_) => NETWORK_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(m) => write!(f, "validation failed: {m}"),
            Self::Rejected(m) => write!(f, "rejected by server: {m}"),
            Self::Transport(m) => write!(f, "transport error: {m}"),
            Self::Decode(m) => write!(f, "decode error: {m}"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Deals and optional commentary returned by a successful search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    /// Deals as returned (possibly empty).
    pub deals: Vec<Deal>,
    /// Backend commentary, when supplied.
    pub insights: Option<String>,
}

/// What: The fixed endpoint set of the deals/skincare backend.
///
/// Details:
/// - One method per endpoint; every call is a single attempt without retry.
/// - Implemented over HTTP by [`HttpBackend`] and in memory by test doubles.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// GET `/current-user`: `Ok(None)` when not authenticated.
    async fn current_user(&self) -> Result<Option<UserIdentity>, SyncError>;

    /// GET `/skincare/profile/{id}`: `Ok(None)` for any non-OK status.
    async fn fetch_profile(&self, user_id: i64) -> Result<Option<PreferenceProfile>, SyncError>;

    /// POST `/login`: the server's success message, or `Rejected` with its error text.
    async fn login(&self, email: &str, password: &Secret) -> Result<String, SyncError>;

    /// POST `/signup`: the server's success message, or `Rejected` with its error text.
    async fn signup(&self, name: &str, email: &str, password: &Secret)
    -> Result<String, SyncError>;

    /// POST `/logout`.
    async fn logout(&self) -> Result<(), SyncError>;

    /// POST `/skincare/quiz`: only the status matters.
    async fn save_profile(&self, profile: &PreferenceProfile) -> Result<(), SyncError>;

    /// POST `/skincare/recommend`: `Ok(None)` when the body has no recommendation list.
    async fn recommend(
        &self,
        profile: &PreferenceProfile,
    ) -> Result<Option<Vec<Recommendation>>, SyncError>;

    /// POST `/deals/api/search`: `Ok(None)` unless `success` and `data.all_deals` are present.
    async fn search(&self, query: &SearchQuery) -> Result<Option<SearchResults>, SyncError>;

    /// GET `/skincare/history/{id}`.
    async fn history(&self, user_id: i64) -> Result<Vec<HistoryEntry>, SyncError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Only validation and rejection texts reach the user verbatim.
    fn sync_error_user_message_hides_transport_detail() {
        assert_eq!(
            SyncError::Rejected("Invalid email or password".into()).user_message(),
            "Invalid email or password"
        );
        assert_eq!(
            SyncError::Transport("connection refused".into()).user_message(),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            SyncError::Decode("expected value".into()).user_message(),
            NETWORK_ERROR_MESSAGE
        );
        assert!(SyncError::Transport("x".into()).to_string().contains("transport"));
    }
}
