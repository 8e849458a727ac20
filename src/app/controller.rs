use std::sync::Arc;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::{JsonConfigStore, JsonProfileStore, TomlSettingsStore};
use crate::domain::{
    ClaudeConfig, ConfigProfile, ConfigResponse, CredentialCheck, DomainError, PlatformInfo,
};
use crate::infrastructure::init_logging;
use crate::ports::{ConfigStore, ProfileStore, SettingsStore};

/// Facade over the configuration and profile stores.
///
/// Every operation the GUI can call lives here and answers with a
/// [`ConfigResponse`]; store errors never escape as `Err`.
pub struct ConfigManager {
    platform: PlatformInfo,
    config_store: Arc<dyn ConfigStore>,
    profile_store: Arc<dyn ProfileStore>,
    /// Flushes file logs on drop.
    #[allow(dead_code)]
    log_guard: Option<WorkerGuard>,
}

impl ConfigManager {
    /// Initialize for the running host.
    /// This detects the platform, loads settings and sets up logging.
    pub fn new() -> Result<Self, DomainError> {
        // Step 1: Resolve home and config directories
        let platform = PlatformInfo::detect()?;

        // Step 2: Load our own settings
        let settings_store = TomlSettingsStore::new(platform.clone());
        let settings = settings_store.load()?;

        // Step 3: Initialize logging
        let log_guard = init_logging(&settings_store.logs_dir(), &settings.logging)?;

        info!(
            platform = platform.os().display_name(),
            config_dir = ?platform.config_dir(),
            "Claude Profiles starting up"
        );

        Ok(Self::assemble(platform, log_guard))
    }

    /// Build the stores for an explicit platform, without touching logging.
    pub fn with_platform(platform: PlatformInfo) -> Self {
        Self::assemble(platform, None)
    }

    fn assemble(platform: PlatformInfo, log_guard: Option<WorkerGuard>) -> Self {
        let config_store: Arc<dyn ConfigStore> = Arc::new(JsonConfigStore::new(platform.clone()));
        let profile_store: Arc<dyn ProfileStore> = Arc::new(JsonProfileStore::new(
            platform.clone(),
            config_store.clone(),
        ));

        Self {
            platform,
            config_store,
            profile_store,
            log_guard,
        }
    }

    /// Get the Claude Code settings file path.
    pub fn config_path(&self) -> String {
        self.config_store.config_path().to_string_lossy().to_string()
    }

    /// Get the profiles directory path.
    pub fn profiles_dir(&self) -> String {
        self.profile_store.profiles_dir().to_string_lossy().to_string()
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform.os().display_name()
    }

    pub fn load_config(&self) -> ConfigResponse<ClaudeConfig> {
        ConfigResponse::from_result(self.config_store.load(), |_| {
            "Configuration loaded successfully".to_string()
        })
    }

    pub fn save_config(&self, auth_token: &str, base_url: &str) -> ConfigResponse<ClaudeConfig> {
        ConfigResponse::from_result(self.config_store.save(auth_token, base_url), |_| {
            "Configuration saved successfully".to_string()
        })
    }

    pub fn delete_config(&self) -> ConfigResponse<()> {
        match self.config_store.delete() {
            Ok(()) => ConfigResponse::ok_empty("Configuration deleted successfully"),
            Err(e) => ConfigResponse::from_error(&e),
        }
    }

    /// Save the given credentials as a reusable profile.
    pub fn save_profile(
        &self,
        name: &str,
        auth_token: &str,
        base_url: &str,
        description: &str,
    ) -> ConfigResponse<ConfigProfile> {
        ConfigResponse::from_result(
            self.profile_store
                .save(name, auth_token, base_url, description),
            |_| "Profile saved successfully".to_string(),
        )
    }

    pub fn load_profiles(&self) -> ConfigResponse<Vec<ConfigProfile>> {
        ConfigResponse::from_result(self.profile_store.load_all(), |profiles| {
            if profiles.is_empty() {
                "No profiles found".to_string()
            } else {
                format!("Loaded {} profiles", profiles.len())
            }
        })
    }

    /// Make a saved profile the active configuration.
    pub fn apply_profile(&self, name: &str) -> ConfigResponse<ClaudeConfig> {
        ConfigResponse::from_result(self.profile_store.apply(name), |_| {
            format!("Profile '{}' applied successfully", name)
        })
    }

    pub fn delete_profile(&self, name: &str) -> ConfigResponse<()> {
        match self.profile_store.delete(name) {
            Ok(()) => ConfigResponse::ok_empty(format!("Profile '{}' deleted successfully", name)),
            Err(e) => ConfigResponse::from_error(&e),
        }
    }

    /// Check a credential pair without saving anything.
    pub fn validate_credentials(
        &self,
        auth_token: &str,
        base_url: &str,
    ) -> ConfigResponse<CredentialCheck> {
        let check = CredentialCheck::new(auth_token, base_url);
        let message = match (check.auth_token_valid, check.base_url_valid) {
            (true, true) => "Credentials look valid",
            (false, true) => "Auth token should start with \"sk-\"",
            (true, false) => "Base URL must be an http(s) URL",
            (false, false) => "Auth token and base URL are both invalid",
        };
        ConfigResponse::ok(message, check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, OsKind};
    use tempfile::TempDir;

    fn manager(temp: &TempDir) -> ConfigManager {
        ConfigManager::with_platform(PlatformInfo::new(OsKind::Linux, temp.path(), None))
    }

    #[test]
    fn test_paths() {
        let temp = TempDir::new().unwrap();
        let manager = manager(&temp);

        assert!(manager.config_path().ends_with("settings.json"));
        assert!(manager.profiles_dir().ends_with("profiles"));
        assert_eq!(manager.platform_name(), "Linux");
    }

    #[test]
    fn test_load_config_before_save() {
        let temp = TempDir::new().unwrap();
        let response = manager(&temp).load_config();

        assert!(!response.success);
        assert_eq!(response.kind, Some(ErrorKind::NotFound));
        assert!(response.data.is_none());
    }

    #[test]
    fn test_save_profile_messages() {
        let temp = TempDir::new().unwrap();
        let manager = manager(&temp);

        let response = manager.save_profile("", "tok", "url", "");
        assert!(!response.success);
        assert_eq!(response.message, "Profile name cannot be empty");
        assert_eq!(response.kind, Some(ErrorKind::Validation));

        let response = manager.save_profile("work", "tok", "url", "");
        assert!(response.success);
        assert_eq!(response.message, "Profile saved successfully");
        assert_eq!(response.data.unwrap().name, "work");
    }

    #[test]
    fn test_load_profiles_messages() {
        let temp = TempDir::new().unwrap();
        let manager = manager(&temp);

        let response = manager.load_profiles();
        assert!(response.success);
        assert_eq!(response.message, "No profiles found");
        assert_eq!(response.data, Some(Vec::new()));

        manager.save_profile("a", "t", "u", "");
        manager.save_profile("b", "t", "u", "");
        assert_eq!(manager.load_profiles().message, "Loaded 2 profiles");
    }

    #[test]
    fn test_delete_config_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = manager(&temp);

        assert!(!manager.delete_config().success);
        assert!(manager.save_config("t", "u").success);

        let response = manager.delete_config();
        assert!(response.success);
        assert_eq!(response.message, "Configuration deleted successfully");
        assert!(!manager.load_config().success);
    }

    #[test]
    fn test_validate_credentials_never_saves() {
        let temp = TempDir::new().unwrap();
        let manager = manager(&temp);

        let response = manager.validate_credentials("nope", "https://api.example.com");
        assert!(response.success);
        let check = response.data.unwrap();
        assert!(!check.auth_token_valid);
        assert!(check.base_url_valid);
        assert!(!std::path::Path::new(&manager.config_path()).exists());
    }
}
