//! Session identity and the stored skincare preference profile.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity returned by the backend for the logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend user id.
    pub id: i64,
    /// Full display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Login email.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// What: The authenticated session held for the lifetime of the app.
///
/// Details:
/// - `preferences_prompted` records whether the one-time "complete your profile"
///   dialog has been shown for this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Who is logged in.
    pub user: UserIdentity,
    /// Always `true` for a stored session; kept to mirror the backend payload.
    pub authenticated: bool,
    /// Whether the profile prompt was already shown.
    pub preferences_prompted: bool,
}

impl Session {
    /// What: Build a fresh session for a user who just authenticated.
    ///
    /// Inputs:
    /// - `user`: Identity returned by the identity check.
    ///
    /// Output:
    /// - Authenticated session with the prompt flag cleared.
    #[must_use]
    pub const fn new(user: UserIdentity) -> Self {
        Self {
            user,
            authenticated: true,
            preferences_prompted: false,
        }
    }

    /// What: Build the session that replaces `previous` after a refresh.
    ///
    /// Inputs:
    /// - `previous`: Session held before the refresh, if any.
    /// - `user`: Identity returned by the refresh.
    ///
    /// Output:
    /// - New session; the prompt flag carries over only when the user id is unchanged.
    #[must_use]
    pub fn refreshed(previous: Option<&Self>, user: UserIdentity) -> Self {
        let prompted = previous.is_some_and(|p| p.user.id == user.id && p.preferences_prompted);
        Self {
            user,
            authenticated: true,
            preferences_prompted: prompted,
        }
    }
}

/// User-declared skincare attributes used for filtering and recommendations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Owner of the profile.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Selected skin type (`oily`, `dry`, ...).
    #[serde(default)]
    pub skin_type: Option<String>,
    /// Skin concerns.
    #[serde(default, deserialize_with = "null_as_default")]
    pub concerns: BTreeSet<String>,
    /// Lower budget bound.
    #[serde(default)]
    pub budget_min: Option<f64>,
    /// Upper budget bound.
    #[serde(default)]
    pub budget_max: Option<f64>,
    /// Ingredients the user wants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_ingredients: BTreeSet<String>,
    /// Ingredients the user wants to avoid.
    #[serde(default, deserialize_with = "null_as_default")]
    pub avoided_ingredients: BTreeSet<String>,
    /// Product attribute preferences (vegan, cruelty free, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_preferences: BTreeSet<String>,
}

impl PreferenceProfile {
    /// What: Return the skin type when one is set and non-blank.
    ///
    /// Output:
    /// - `Some(&str)` with the trimmed skin type, else `None`.
    #[must_use]
    pub fn skin_type(&self) -> Option<&str> {
        self.skin_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Deserialize `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
