pub mod config_store;
pub mod fs;
pub mod profile_store;
pub mod settings_store;

pub use config_store::JsonConfigStore;
pub use profile_store::JsonProfileStore;
pub use settings_store::TomlSettingsStore;
