use std::fs;
use std::path::Path;

use crate::theme::paths::settings_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod normalize;
mod parse_settings;

pub use normalize::normalize;
use parse_settings::parse_settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&settings_path())
}

/// What: Load settings from an explicit file path.
///
/// Inputs:
/// - `path`: Settings file to read.
///
/// Output:
/// - Defaults overlaid with the file's values, then normalized.
///
/// Details:
/// - A missing or unreadable file is logged and yields defaults.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf missing or unreadable, using defaults"
            );
        }
    }
    normalize(&mut out);
    out
}
