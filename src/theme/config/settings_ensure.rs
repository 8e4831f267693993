use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::theme::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::theme::parsing::canonical_key;
use crate::theme::paths::settings_path;
use crate::theme::types::Settings;

/// Write any missing keys into the user's `settings.conf`.
pub fn ensure_settings_keys_present(prefs: &Settings) {
    ensure_settings_keys_at(&settings_path(), prefs);
}

/// Every key the client understands, paired with its current value.
fn known_keys(prefs: &Settings) -> [(&'static str, String); 8] {
    [
        ("base_url", prefs.base_url.clone()),
        ("max_results", prefs.max_results.to_string()),
        ("use_location_default", prefs.use_location_default.to_string()),
        ("match_profile_default", prefs.match_profile_default.to_string()),
        ("alert_dismiss_secs", prefs.alert_dismiss_secs.to_string()),
        ("login_refresh_delay_ms", prefs.login_refresh_delay_ms.to_string()),
        ("prompt_delay_ms", prefs.prompt_delay_ms.to_string()),
        ("placeholder_image_base", prefs.placeholder_image_base.clone()),
    ]
}

/// What: Bring the settings file at `p` up to date with the known keys.
///
/// Inputs:
/// - `p`: Settings file path.
/// - `prefs`: Values written for keys that are missing.
///
/// Output:
/// - None; write failures are logged and otherwise ignored.
///
/// Details:
/// - A missing or blank file starts from the commented skeleton.
/// - Present keys are recognised in any spelling `canonical_key` folds together.
/// - The file is rewritten only when something was added.
pub fn ensure_settings_keys_at(p: &Path, prefs: &Settings) {
    if let Some(dir) = p.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let existing = fs::read_to_string(p).unwrap_or_default();
    let fresh = existing.trim().is_empty();
    let mut content = if fresh {
        SETTINGS_SKELETON_CONTENT.to_string()
    } else {
        existing
    };

    let present: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with('#') && !l.starts_with("//"))
        .filter_map(|l| l.split_once('=').map(|(k, _)| canonical_key(k)))
        .collect();

    let missing: Vec<String> = known_keys(prefs)
        .into_iter()
        .filter(|(k, _)| !present.contains(*k))
        .map(|(k, v)| format!("{k} = {v}"))
        .collect();

    if !fresh && missing.is_empty() {
        return;
    }
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for line in missing {
        content.push_str(&line);
        content.push('\n');
    }
    if let Err(e) = fs::write(p, content) {
        tracing::warn!(path = %p.display(), error = %e, "[Config] failed to write settings.conf");
    }
}
