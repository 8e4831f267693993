//! Theme palette, configuration paths, and user settings.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration file management.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and management.
mod settings;
/// Theme store.
mod store;
/// Theme type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_keys_present, ensure_settings_keys_at};
pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings_from, normalize, settings};
pub use store::theme;
pub use types::{Settings, Theme};
