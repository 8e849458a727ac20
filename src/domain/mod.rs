pub mod config;
pub mod error;
pub mod platform;
pub mod profile;
pub mod response;
pub mod validation;

pub use config::{AppSettings, ClaudeConfig, EnvSection, LoggingConfig, PermissionsSection};
pub use error::{DomainError, ErrorKind};
pub use platform::{OsKind, PlatformInfo};
pub use profile::{check_profile_identity, validate_profile_name, ConfigProfile, PROFILE_SUFFIX};
pub use response::ConfigResponse;
pub use validation::CredentialCheck;
