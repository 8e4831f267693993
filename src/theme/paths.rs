use std::env;
use std::fs;
use std::path::PathBuf;

/// Directory name used under every config base.
const APP_DIR: &str = "skindeals";

/// `$HOME/.config`, when HOME is set.
fn home_config_base() -> Option<PathBuf> {
    env::var_os("HOME").map(|h| PathBuf::from(h).join(".config"))
}

/// `$XDG_CONFIG_HOME`, when set and not blank.
fn xdg_config_base() -> Option<PathBuf> {
    env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|x| !x.trim().is_empty())
        .map(PathBuf::from)
}

/// What: Return the skindeals config directory, creating it when missing.
///
/// Output:
/// - `$HOME/.config/skindeals` when it can be created, else
///   `$XDG_CONFIG_HOME/skindeals`, else `./.config/skindeals`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_base().map(|b| b.join(APP_DIR))
        && fs::create_dir_all(&dir).is_ok()
    {
        return dir;
    }
    let dir = xdg_config_base()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_DIR);
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Log directory `<config_dir>/logs`, created when missing.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Locate `settings.conf`.
///
/// Output:
/// - The first existing file among `$HOME/.config/skindeals/settings.conf` and
///   `$XDG_CONFIG_HOME/skindeals/settings.conf`; otherwise the path under
///   [`config_dir`] where a new file should be created.
pub fn settings_path() -> PathBuf {
    [home_config_base(), xdg_config_base()]
        .into_iter()
        .flatten()
        .map(|base| base.join(APP_DIR).join("settings.conf"))
        .find(|p| p.is_file())
        .unwrap_or_else(|| config_dir().join("settings.conf"))
}
