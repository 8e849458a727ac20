use std::path::PathBuf;

use crate::domain::{ClaudeConfig, ConfigProfile, DomainError};

/// Port for named credential profiles.
///
/// Implementations store one document per profile name.
pub trait ProfileStore: Send + Sync {
    /// Get the directory profiles are stored in.
    fn profiles_dir(&self) -> PathBuf;

    /// Create or replace the profile called `name`.
    ///
    /// Replacing keeps the original creation time.
    fn save(
        &self,
        name: &str,
        auth_token: &str,
        base_url: &str,
        description: &str,
    ) -> Result<ConfigProfile, DomainError>;

    /// Load a single profile by name.
    fn load(&self, name: &str) -> Result<ConfigProfile, DomainError>;

    /// List every readable profile. Unreadable entries are skipped.
    fn load_all(&self) -> Result<Vec<ConfigProfile>, DomainError>;

    /// Write the profile's credentials into the active configuration.
    fn apply(&self, name: &str) -> Result<ClaudeConfig, DomainError>;

    /// Delete a stored profile.
    fn delete(&self, name: &str) -> Result<(), DomainError>;
}
