use tauri::State;

use crate::app::ConfigManager;
use crate::domain::{ClaudeConfig, ConfigProfile, ConfigResponse, CredentialCheck};

// ==================== Path Commands ====================

/// Get the Claude Code settings file path.
#[tauri::command]
pub fn get_config_path(manager: State<'_, ConfigManager>) -> String {
    manager.config_path()
}

/// Get the profiles directory path.
#[tauri::command]
pub fn get_profiles_dir(manager: State<'_, ConfigManager>) -> String {
    manager.profiles_dir()
}

#[tauri::command]
pub fn get_platform_name(manager: State<'_, ConfigManager>) -> String {
    manager.platform_name().to_string()
}

// ==================== Config Commands ====================

/// Load the active Claude Code configuration.
#[tauri::command]
pub fn load_config(manager: State<'_, ConfigManager>) -> ConfigResponse<ClaudeConfig> {
    manager.load_config()
}

/// Write new credentials into the active configuration.
#[tauri::command]
pub fn save_config(
    manager: State<'_, ConfigManager>,
    auth_token: String,
    base_url: String,
) -> ConfigResponse<ClaudeConfig> {
    manager.save_config(&auth_token, &base_url)
}

#[tauri::command]
pub fn delete_config(manager: State<'_, ConfigManager>) -> ConfigResponse<()> {
    manager.delete_config()
}

#[tauri::command]
pub fn validate_credentials(
    manager: State<'_, ConfigManager>,
    auth_token: String,
    base_url: String,
) -> ConfigResponse<CredentialCheck> {
    manager.validate_credentials(&auth_token, &base_url)
}

// ==================== Profile Commands ====================

/// Save credentials as a named profile.
#[tauri::command]
pub fn save_profile(
    manager: State<'_, ConfigManager>,
    name: String,
    auth_token: String,
    base_url: String,
    description: Option<String>,
) -> ConfigResponse<ConfigProfile> {
    manager.save_profile(
        &name,
        &auth_token,
        &base_url,
        description.as_deref().unwrap_or_default(),
    )
}

/// List all saved profiles.
#[tauri::command]
pub fn load_profiles(manager: State<'_, ConfigManager>) -> ConfigResponse<Vec<ConfigProfile>> {
    manager.load_profiles()
}

/// Apply a saved profile to the active configuration.
#[tauri::command]
pub fn apply_profile(
    manager: State<'_, ConfigManager>,
    name: String,
) -> ConfigResponse<ClaudeConfig> {
    manager.apply_profile(&name)
}

#[tauri::command]
pub fn delete_profile(manager: State<'_, ConfigManager>, name: String) -> ConfigResponse<()> {
    manager.delete_profile(&name)
}
