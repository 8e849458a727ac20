pub mod controller;

pub use controller::ConfigManager;
