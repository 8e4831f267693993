use crate::sources::SyncError;
use crate::state::{PreferenceForm, PreferenceProfile};

/// Shown when the form is submitted without a skin type.
pub const SKIN_TYPE_REQUIRED: &str = "Please select a skin type";

/// What: Validate the preferences form and build the profile to submit.
///
/// Inputs:
/// - `form`: Dialog contents.
/// - `user_id`: Id of the logged-in user.
///
/// Output:
/// - `Ok(PreferenceProfile)` ready for the quiz endpoint.
/// - `Err(SyncError::Validation)` when no skin type is selected.
///
/// Details:
/// - Budgets that do not parse as numbers are sent as absent.
pub fn profile_from_form(form: &PreferenceForm, user_id: i64) -> Result<PreferenceProfile, SyncError> {
    let skin_type = form
        .skin_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SyncError::Validation(SKIN_TYPE_REQUIRED.to_string()))?;
    Ok(PreferenceProfile {
        user_id: Some(user_id),
        skin_type: Some(skin_type.to_string()),
        concerns: form.concerns.clone(),
        budget_min: parse_budget(&form.budget_min),
        budget_max: parse_budget(&form.budget_max),
        preferred_ingredients: form.preferred_ingredients.clone(),
        avoided_ingredients: form.avoided_ingredients.clone(),
        product_preferences: form.product_preferences.clone(),
    })
}

/// Parse a budget field; blank or malformed text yields `None`.
fn parse_budget(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
