//! Settings persistence for the Ssopanel CLI/TUI.
//!
//! This module provides a small JSON-backed store that holds the configured
//! identity-provider records. The file is written to the standard
//! configuration directory (`~/.config/ssopanel/settings.json` on most
//! platforms). Reads are tolerant: a missing file yields an empty list and a
//! corrupt file is logged and replaced by defaults rather than failing the
//! whole application.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use ssopanel_types::Provider;
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "SSOPANEL_SETTINGS_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when reading or writing settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted settings values.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsPayload {
    /// Configured single-sign-on providers.
    #[serde(default)]
    pub providers: Vec<Provider>,
}

/// JSON-file-backed store for the provider list.
#[derive(Debug, Default)]
pub struct SettingsStore {
    path: PathBuf,
    persist_to_disk: bool,
}

impl SettingsStore {
    /// Create a store rooted at the default config-directory path, honoring
    /// the `SSOPANEL_SETTINGS_PATH` override.
    pub fn new() -> Self {
        Self {
            path: default_settings_path(),
            persist_to_disk: true,
        }
    }

    /// Create a store rooted at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            persist_to_disk: true,
        }
    }

    /// Build an in-memory store that never touches the filesystem; used as a
    /// fallback when the config directory cannot be written.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored provider list. Missing and unparseable files both
    /// yield defaults; only hard I/O errors are logged as failures.
    pub fn load(&self) -> Vec<Provider> {
        if !self.persist_to_disk {
            return Vec::new();
        }
        match fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str::<SettingsPayload>(&data) {
                Ok(payload) => payload.providers,
                Err(error) => {
                    warn!(
                        path = %self.path.display(),
                        error = %error,
                        "Failed to parse settings file; using defaults"
                    );
                    Vec::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    error = %error,
                    "Failed to read settings file; using defaults"
                );
                Vec::new()
            }
        }
    }

    /// Persist the provider list, creating parent directories as needed.
    pub fn save(&self, providers: &[Provider]) -> Result<(), SettingsError> {
        if !self.persist_to_disk {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = SettingsPayload {
            providers: providers.to_vec(),
        };
        let data = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ssopanel")
        .join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssopanel_types::{ProviderKind, ProviderType};

    #[test]
    fn round_trips_the_provider_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::at_path(dir.path().join("settings.json"));

        let providers = vec![
            Provider::new(ProviderType::Google).with_label("G"),
            Provider::new(ProviderType::Okta).with_label("O"),
        ];
        store.save(&providers).expect("save settings");

        let loaded = store.load();
        assert_eq!(loaded, providers);
        assert!(matches!(loaded[0].kind, ProviderKind::Google { .. }));
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::at_path(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("write corrupt file");
        let store = SettingsStore::at_path(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn ephemeral_store_never_writes() {
        let store = SettingsStore::ephemeral();
        let providers = vec![Provider::new(ProviderType::OneLogin)];
        store.save(&providers).expect("ephemeral save is a no-op");
        assert!(store.load().is_empty());
    }
}
