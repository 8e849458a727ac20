#![forbid(unsafe_code)]

pub mod adapters;
pub mod app;
#[cfg(feature = "desktop")]
mod commands;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use app::ConfigManager;
pub use domain::{
    ClaudeConfig, ConfigProfile, ConfigResponse, DomainError, ErrorKind, OsKind, PlatformInfo,
};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{
        // Path commands
        get_config_path, get_platform_name, get_profiles_dir,
        // Config commands
        delete_config, load_config, save_config, validate_credentials,
        // Profile commands
        apply_profile, delete_profile, load_profiles, save_profile,
    };

    // Initialize the configuration manager
    let manager = match ConfigManager::new() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(manager)
        .invoke_handler(tauri::generate_handler![
            // Path commands
            get_config_path,
            get_profiles_dir,
            get_platform_name,
            // Config commands
            load_config,
            save_config,
            delete_config,
            validate_credentials,
            // Profile commands
            save_profile,
            load_profiles,
            apply_profile,
            delete_profile,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
