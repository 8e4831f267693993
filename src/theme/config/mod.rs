//! Settings file creation and key migration.

mod settings_ensure;
mod skeletons;

pub use settings_ensure::{ensure_settings_keys_at, ensure_settings_keys_present};
pub use skeletons::SETTINGS_SKELETON_CONTENT;
