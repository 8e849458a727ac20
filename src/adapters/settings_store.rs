use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::adapters::fs::{ensure_dir, write_atomic};
use crate::domain::{AppSettings, DomainError, PlatformInfo};
use crate::ports::SettingsStore;

/// TOML-based store for the manager's own settings, kept in the
/// OS-specific application directory.
pub struct TomlSettingsStore {
    platform: PlatformInfo,
}

impl TomlSettingsStore {
    pub fn new(platform: PlatformInfo) -> Self {
        Self { platform }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.platform.logs_dir()
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<AppSettings, DomainError> {
        let settings_path = self.settings_path();

        if settings_path.exists() {
            debug!(path = ?settings_path, "Loading settings");
            let content = fs::read_to_string(&settings_path)
                .map_err(|e| DomainError::Settings(e.to_string()))?;
            let settings: AppSettings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            info!(path = ?settings_path, "Settings file not found, creating default");
            let settings = AppSettings::new();
            self.save(&settings)?;
            Ok(settings)
        }
    }

    fn save(&self, settings: &AppSettings) -> Result<(), DomainError> {
        let settings_path = self.settings_path();

        ensure_dir(
            &self.platform.app_dir(),
            self.platform.file_permissions(true),
            "settings directory",
        )?;

        let content = toml::to_string_pretty(settings)?;
        write_atomic(
            &settings_path,
            content.as_bytes(),
            self.platform.file_permissions(false),
            "settings file",
        )?;

        info!(path = ?settings_path, "Settings saved");
        Ok(())
    }

    fn settings_path(&self) -> PathBuf {
        self.platform.app_dir().join("config.toml")
    }
}
