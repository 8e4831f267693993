//! Core value types shared across state, networking, and UI.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use zeroize::Zeroizing;

use crate::state::modal::AuthTab;
use crate::state::session::{PreferenceProfile, UserIdentity, null_as_default};
use crate::util::{lenient_f64, strict_f64};

/// What: The single top-level panel currently visible.
///
/// Details:
/// - Stored as one field on `AppState`, so exactly one panel is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing searched yet, or the last search produced nothing to show.
    #[default]
    Empty,
    /// A search request is in flight.
    Loading,
    /// Deal cards for the last search.
    Results,
    /// Recommendation cards for the saved profile.
    Recommendations,
}

/// A priced product listing returned by deal search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Listing title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    /// Store or marketplace name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub seller: String,
    /// Current price; non-numeric values decode as `None`.
    #[serde(default, deserialize_with = "number_only")]
    pub price: Option<f64>,
    /// Previous price, when the seller reports one.
    #[serde(default, deserialize_with = "number_only")]
    pub original_price: Option<f64>,
    /// Product image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Link to the listing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A product suggested by the recommendation backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Backend product id.
    #[serde(default)]
    pub product_id: Option<i64>,
    /// Product name (recommender field).
    #[serde(default)]
    pub name: Option<String>,
    /// Product name (search-style field, used when `name` is absent).
    #[serde(default)]
    pub product_name: Option<String>,
    /// Brand.
    #[serde(default)]
    pub brand: Option<String>,
    /// Price; numbers and numeric strings are accepted.
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub price: Option<f64>,
    /// Why the backend picked this product.
    #[serde(default)]
    pub reason: Option<String>,
    /// Product image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Product page.
    #[serde(default)]
    pub url: Option<String>,
    /// Match score from the recommender.
    #[serde(default, deserialize_with = "number_only")]
    pub score: Option<f64>,
}

impl Recommendation {
    /// What: Name shown on the card and used for the "find best price" search.
    ///
    /// Output:
    /// - `name`, else `product_name`, else `"Product"`; blank values are skipped.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.product_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("Product")
    }
}

/// One past recommendation run for the logged-in user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryEntry {
    /// Backend session id.
    #[serde(default)]
    pub session_id: Option<i64>,
    /// ISO-8601 creation timestamp as sent by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Ranked items of the run.
    #[serde(default, alias = "items", deserialize_with = "null_as_default")]
    pub recommendations: Vec<HistoryItem>,
}

/// A ranked item inside a [`HistoryEntry`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryItem {
    /// 1-based rank.
    #[serde(default)]
    pub rank: u32,
    /// Match score.
    #[serde(default, deserialize_with = "number_only")]
    pub match_score: Option<f64>,
    /// Reason text.
    #[serde(default)]
    pub reason: Option<String>,
    /// Product snapshot, when the backend still knows the product.
    #[serde(default)]
    pub product: Option<Recommendation>,
}

/// Search parameters sent to the deals endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, non-empty query text.
    pub text: String,
    /// Ask the backend to localize results by client IP.
    pub use_location: bool,
    /// Result cap forwarded to the backend.
    pub max_results: u32,
}

/// What: A password buffer that is wiped on drop and never printed.
///
/// Details:
/// - `Debug` prints a redacted marker so states and requests can be logged safely.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap an existing string.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(Zeroizing::new(value))
    }

    /// Borrow the secret text.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Append one character.
    pub fn push(&mut self, ch: char) {
        self.0.push(ch);
    }

    /// Remove the last character.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// Number of characters (for masking).
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// What should happen after a session refresh completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Plain refresh (start-up).
    None,
    /// After login: prompt for preferences once per session if no profile exists.
    PromptIfMissing,
    /// After signup: always open the preferences dialog.
    PromptAlways,
}

/// What: A request from the UI to the remote sync worker.
///
/// Details:
/// - Produced by the dispatch helpers in `crate::logic::dispatch`; each variant is one
///   user action and is attempted exactly once.
#[derive(Clone, Debug)]
pub enum RemoteRequest {
    /// Re-check identity, then fetch the profile.
    RefreshSession {
        /// Post-refresh behavior.
        follow_up: FollowUp,
    },
    /// Credentials login.
    Login {
        /// Email as typed.
        email: String,
        /// Password as typed.
        password: Secret,
    },
    /// Account creation.
    Signup {
        /// Display name.
        name: String,
        /// Email as typed.
        email: String,
        /// Password as typed.
        password: Secret,
    },
    /// End the session.
    Logout,
    /// Save the profile, then ask for recommendations.
    SubmitProfile(PreferenceProfile),
    /// Deal search.
    Search(SearchQuery),
    /// Load past recommendation runs.
    FetchHistory {
        /// Owner of the history.
        user_id: i64,
    },
}

/// What: A result reported by the remote sync worker, applied by the event loop.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Identity check finished; `None` means guest (or the check failed).
    SessionResolved(Option<UserIdentity>),
    /// Profile fetch finished; `None` means no profile yet.
    ProfileLoaded(Option<PreferenceProfile>),
    /// Login or signup accepted by the server.
    AuthAccepted {
        /// Which form submitted.
        tab: AuthTab,
        /// Server message.
        message: String,
    },
    /// Login or signup refused, or the request failed.
    AuthRejected {
        /// Which form submitted.
        tab: AuthTab,
        /// Message to show inline.
        message: String,
    },
    /// Time to close the auth dialog after a successful login/signup.
    AuthFinished,
    /// Ask the event loop to open the preferences dialog.
    PromptPreferences {
        /// Honor the one-time-per-session flag.
        once: bool,
    },
    /// Logout accepted.
    LoggedOut,
    /// Logout refused or failed.
    LogoutFailed(String),
    /// Step (a) of profile submission succeeded.
    ProfileSaved(PreferenceProfile),
    /// Step (a) failed; step (b) was not attempted.
    ProfileSaveFailed(String),
    /// Step (b) returned a list (possibly empty).
    RecommendationsReady {
        /// Owner of the profile the list was computed for.
        user_id: Option<i64>,
        /// Ranked recommendations.
        list: Vec<Recommendation>,
    },
    /// Step (b) returned no list or failed.
    RecommendationsFailed(String),
    /// Deal search produced a list (possibly empty).
    SearchCompleted {
        /// Query that was searched.
        query: String,
        /// Deals as returned.
        deals: Vec<Deal>,
        /// Optional commentary from the backend.
        insights: Option<String>,
    },
    /// Deal search produced nothing usable.
    SearchFailed {
        /// Query that was searched.
        query: String,
    },
    /// History loaded.
    HistoryLoaded {
        /// User the history was requested for.
        user_id: i64,
        /// Past runs, newest first as returned.
        entries: Vec<HistoryEntry>,
    },
    /// History could not be loaded.
    HistoryFailed(String),
}

/// Decode a JSON number into `Option<f64>`, mapping anything else to `None`.
fn number_only<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(strict_f64(&v))
}

/// Decode a JSON number or numeric string into `Option<f64>`.
fn number_or_numeric_string<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(lenient_f64(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Deal prices decode strictly; strings and nulls become `None`.
    ///
    /// Inputs:
    /// - Deals with numeric, string, null, and missing prices.
    ///
    /// Output:
    /// - Only the numeric price survives; other fields fall back to defaults.
    fn deal_price_decodes_numbers_only() {
        let raw = r#"[
            {"product_name": "A", "seller": "S", "price": 9.5, "url": "u"},
            {"product_name": "B", "price": "9.5"},
            {"product_name": "C", "price": null, "seller": null},
            {"product_name": "D"}
        ]"#;
        let deals: Vec<Deal> = serde_json::from_str(raw).expect("decode");
        assert_eq!(deals[0].price, Some(9.5));
        assert_eq!(deals[1].price, None);
        assert_eq!(deals[2].price, None);
        assert_eq!(deals[2].seller, "");
        assert_eq!(deals[3].url, "");
    }

    #[test]
    /// What: Recommendation display name and lenient price decoding.
    ///
    /// Inputs:
    /// - Recommendations using `name`, `product_name`, or neither.
    ///
    /// Output:
    /// - Name precedence is `name` > `product_name` > `"Product"`; numeric strings parse.
    fn recommendation_display_name_and_price() {
        let raw = r#"[
            {"name": "Gel Cleanser", "product_name": "ignored", "price": "12.00"},
            {"name": "", "product_name": "Night Cream", "price": 30},
            {"brand": "Acme", "price": "n/a"}
        ]"#;
        let recs: Vec<Recommendation> = serde_json::from_str(raw).expect("decode");
        assert_eq!(recs[0].display_name(), "Gel Cleanser");
        assert_eq!(recs[0].price, Some(12.0));
        assert_eq!(recs[1].display_name(), "Night Cream");
        assert_eq!(recs[2].display_name(), "Product");
        assert_eq!(recs[2].price, None);
    }

    #[test]
    /// What: Secrets never appear in debug output.
    fn secret_debug_is_redacted() {
        let s = Secret::new("hunter22".into());
        let req = RemoteRequest::Login {
            email: "a@b.c".into(),
            password: s,
        };
        let dbg = format!("{req:?}");
        assert!(!dbg.contains("hunter22"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    /// What: History entries accept both `recommendations` and `items` keys.
    fn history_entry_accepts_items_alias() {
        let raw = r#"{"session_id": 4, "created_at": "2024-05-01T10:00:00",
            "items": [{"rank": 1, "match_score": 0.92, "reason": "fits oily skin",
                       "product": {"name": "Toner", "brand": "Acme", "price": 14.0}}]}"#;
        let entry: HistoryEntry = serde_json::from_str(raw).expect("decode");
        assert_eq!(entry.recommendations.len(), 1);
        assert_eq!(
            entry.recommendations[0]
                .product
                .as_ref()
                .map(Recommendation::display_name),
            Some("Toner")
        );
    }
}
