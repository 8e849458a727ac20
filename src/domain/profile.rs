use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// File suffix of a stored profile.
pub const PROFILE_SUFFIX: &str = ".json";

/// A named, reusable set of credentials.
///
/// The trimmed name is the profile's identity: it becomes the file name
/// `<name>.json` in the profiles directory. Timestamps keep the offset
/// they were written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProfile {
    pub name: String,
    pub auth_token: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ConfigProfile {
    /// Build a profile stamped with `now`. String fields are trimmed.
    pub fn new(
        name: &str,
        auth_token: &str,
        base_url: &str,
        description: &str,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            auth_token: auth_token.trim().to_string(),
            base_url: base_url.trim().to_string(),
            created_at: now,
            updated_at: now,
            description: description.trim().to_string(),
        }
    }

    /// Keep the creation time of the profile this one replaces.
    pub fn carry_created_at(mut self, previous: &ConfigProfile) -> Self {
        self.created_at = previous.created_at;
        self
    }

    /// File name this profile is stored under.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, PROFILE_SUFFIX)
    }
}

/// Reject names that would resolve outside the profiles directory.
/// The name is checked as given, without trimming.
pub fn check_profile_identity(name: &str) -> Result<(), DomainError> {
    if name.contains(['/', '\\']) || name.trim() == "." || name.trim() == ".." {
        return Err(DomainError::Validation(
            "Profile name cannot contain path separators".to_string(),
        ));
    }
    Ok(())
}

/// Check that a profile name is usable as an on-disk identity and return
/// its trimmed form.
pub fn validate_profile_name(name: &str) -> Result<&str, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "Profile name cannot be empty".to_string(),
        ));
    }
    check_profile_identity(name)?;
    Ok(name)
}
