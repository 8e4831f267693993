//! Option vocabularies offered by the preferences form.
//!
//! Values are the wire tokens the backend stores; underscores become spaces
//! when shown and when matched against product text.

/// Skin types the backend accepts.
pub const SKIN_TYPES: &[&str] = &["oily", "dry", "combination", "normal", "sensitive"];

/// Skin concerns the backend accepts.
pub const CONCERNS: &[&str] = &[
    "acne",
    "redness",
    "wrinkles",
    "dark-spots",
    "dryness",
    "oiliness",
    "sensitivity",
    "pores",
    "aging",
    "dullness",
];

/// Ingredients a user may ask for.
pub const PREFERRED_INGREDIENTS: &[&str] = &[
    "niacinamide",
    "hyaluronic_acid",
    "vitamin_c",
    "retinol",
    "salicylic_acid",
    "ceramides",
];

/// Ingredients a user may want to avoid.
pub const AVOIDED_INGREDIENTS: &[&str] = &["fragrance", "alcohol", "sulfates", "parabens"];

/// Product attribute preferences.
pub const PRODUCT_PREFERENCES: &[&str] = &["vegan", "cruelty_free", "fragrance_free", "organic"];

/// Query keywords that mark a search as skincare-related.
pub const SKINCARE_KEYWORDS: &[&str] = &[
    "moisturizer",
    "cleanser",
    "serum",
    "cream",
    "lotion",
    "toner",
    "mask",
    "sunscreen",
    "spf",
];

/// What: Turn a wire token into display/match text.
///
/// Inputs:
/// - `token`: Vocabulary value such as `hyaluronic_acid`.
///
/// Output:
/// - The token with underscores replaced by spaces (`hyaluronic acid`).
#[must_use]
pub fn humanize(token: &str) -> String {
    token.replace('_', " ")
}
