use std::path::PathBuf;

use crate::domain::{AppSettings, ClaudeConfig, DomainError};

/// Port for the active Claude Code configuration document.
pub trait ConfigStore: Send + Sync {
    /// Load the configuration.
    /// Fails with `NotFound` when no settings file exists yet.
    fn load(&self) -> Result<ClaudeConfig, DomainError>;

    /// Merge new credentials into the stored document and write it back.
    /// A missing or unreadable document is treated as empty.
    fn save(&self, auth_token: &str, base_url: &str) -> Result<ClaudeConfig, DomainError>;

    /// Remove the settings file.
    fn delete(&self) -> Result<(), DomainError>;

    /// Get the path to the settings file.
    fn config_path(&self) -> PathBuf;

    /// Get the directory holding the settings file.
    fn config_dir(&self) -> PathBuf;
}

/// Port for the manager's own settings.
pub trait SettingsStore: Send + Sync {
    /// Load settings, creating a default file if none exists.
    fn load(&self) -> Result<AppSettings, DomainError>;

    fn save(&self, settings: &AppSettings) -> Result<(), DomainError>;

    fn settings_path(&self) -> PathBuf;
}
