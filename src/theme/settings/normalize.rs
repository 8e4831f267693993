use crate::theme::types::Settings;

/// Largest result cap the backend honours.
const MAX_RESULTS_CAP: u32 = 50;

/// What: Normalize settings values parsed from configuration files.
///
/// Inputs:
/// - `settings`: Mutable reference to `Settings` to normalize in-place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Clamps `max_results` to 1..=50 and `alert_dismiss_secs` to at least 1.
/// - Trims whitespace and trailing slashes from URLs.
pub fn normalize(settings: &mut Settings) {
    settings.max_results = settings.max_results.clamp(1, MAX_RESULTS_CAP);
    settings.alert_dismiss_secs = settings.alert_dismiss_secs.max(1);
    settings.base_url = settings.base_url.trim().trim_end_matches('/').to_string();
    settings.placeholder_image_base = settings
        .placeholder_image_base
        .trim()
        .trim_end_matches('/')
        .to_string();
}
