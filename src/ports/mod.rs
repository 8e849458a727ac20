pub mod config;
pub mod profile;

pub use config::{ConfigStore, SettingsStore};
pub use profile::ProfileStore;
