use std::fmt::Write;

use crate::state::vocab::{SKINCARE_KEYWORDS, humanize};
use crate::state::{AppState, Deal, PreferenceProfile};

/// What: Whether a query names a skincare product category.
///
/// Inputs:
/// - `query`: Search text as typed.
///
/// Output:
/// - `true` when the lowercased query contains any skincare keyword.
#[must_use]
pub fn is_skincare_query(query: &str) -> bool {
    let q = query.to_lowercase();
    SKINCARE_KEYWORDS.iter().any(|k| q.contains(k))
}

/// What: Decide whether one deal fits a skin profile.
///
/// Inputs:
/// - `deal`: Candidate deal.
/// - `skin_type`: Lowercase-comparable skin type (non-empty).
/// - `profile`: Profile providing ingredient lists.
///
/// Output:
/// - `skin_match || (ingredient_match && avoid_match)` over the lowercased
///   `product_name + " " + description` text.
fn deal_matches(deal: &Deal, skin_type: &str, profile: &PreferenceProfile) -> bool {
    let text = format!(
        "{} {}",
        deal.product_name,
        deal.description.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let skin_match = text.contains(&skin_type.to_lowercase());
    let ingredient_match = profile.preferred_ingredients.is_empty()
        || profile
            .preferred_ingredients
            .iter()
            .any(|i| text.contains(&humanize(i).to_lowercase()));
    let avoid_match = !profile
        .avoided_ingredients
        .iter()
        .any(|i| text.contains(&humanize(i).to_lowercase()));

    skin_match || (ingredient_match && avoid_match)
}

/// What: Apply the profile relevance filter to a deal list.
///
/// Inputs:
/// - `deals`: Deals as returned by search.
/// - `query`: Query that produced them.
/// - `profile`: Stored profile, if any.
/// - `enabled`: Match-profile toggle.
///
/// Output:
/// - The retained deals. The input is returned unchanged when the filter is not
///   engaged or when nothing would be retained.
///
/// Details:
/// - Engaged only when `enabled`, the profile has a non-blank skin type, and the
///   query is a skincare query.
#[must_use]
pub fn filter_deals(
    deals: &[Deal],
    query: &str,
    profile: Option<&PreferenceProfile>,
    enabled: bool,
) -> Vec<Deal> {
    let Some((profile, skin)) = profile.and_then(|p| p.skin_type().map(|s| (p, s))) else {
        return deals.to_vec();
    };
    if !enabled || !is_skincare_query(query) {
        return deals.to_vec();
    }
    let kept: Vec<Deal> = deals
        .iter()
        .filter(|d| deal_matches(d, skin, profile))
        .cloned()
        .collect();
    if kept.is_empty() {
        deals.to_vec()
    } else {
        kept
    }
}

/// What: Build the results header line.
///
/// Inputs:
/// - `shown`: Number of deals shown.
/// - `total`: Number of deals received.
/// - `enabled`: Match-profile toggle.
/// - `skin_type`: Profile skin type, if any.
///
/// Output:
/// - `Found N deals`, with ` (filtered for {skin} skin)` when the toggle is on and
///   the shown list is shorter than the received one.
#[must_use]
pub fn count_line(shown: usize, total: usize, enabled: bool, skin_type: Option<&str>) -> String {
    let mut line = format!("Found {shown} deals");
    if enabled
        && shown < total
        && let Some(skin) = skin_type
    {
        let _ = write!(line, " (filtered for {skin} skin)");
    }
    line
}

/// What: Recompute `app.deals` and the count line from `app.all_deals`.
///
/// Inputs:
/// - `app`: Mutable application state holding the last search, profile, and toggle.
///
/// Output:
/// - Updates `app.deals`, `app.filter_applied`, and `app.count_line`.
pub fn apply_profile_filter(app: &mut AppState) {
    let shown = filter_deals(
        &app.all_deals,
        &app.searched_query,
        app.profile.as_ref(),
        app.match_profile,
    );
    app.filter_applied = shown.len() < app.all_deals.len();
    app.count_line = count_line(
        shown.len(),
        app.all_deals.len(),
        app.match_profile,
        app.profile_skin_type(),
    );
    app.deals = shown;
}
