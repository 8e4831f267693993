use crate::theme::parsing::{canonical_key, parse_bool, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are treated as `_`.
/// - Unknown keys and unparsable values are ignored, leaving the previous value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = canonical_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "base_url" | "server_url" => {
                if !val.is_empty() {
                    settings.base_url = val.to_string();
                }
            }
            "max_results" => {
                if let Ok(v) = val.parse::<u32>() {
                    settings.max_results = v;
                }
            }
            "use_location_default" => {
                if let Some(b) = parse_bool(val) {
                    settings.use_location_default = b;
                }
            }
            "match_profile_default" => {
                if let Some(b) = parse_bool(val) {
                    settings.match_profile_default = b;
                }
            }
            "alert_dismiss_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.alert_dismiss_secs = v;
                }
            }
            "login_refresh_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.login_refresh_delay_ms = v;
                }
            }
            "prompt_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.prompt_delay_ms = v;
                }
            }
            "placeholder_image_base" => {
                if !val.is_empty() {
                    settings.placeholder_image_base = val.to_string();
                }
            }
            _ => {}
        }
    }
}
