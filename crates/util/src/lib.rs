//! Persistence and small helpers shared by the Ssopanel CLI and TUI.

mod settings_store;

pub use settings_store::{
    SETTINGS_FILE_NAME, SETTINGS_PATH_ENV, SettingsError, SettingsPayload, SettingsStore,
};

use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_next::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
