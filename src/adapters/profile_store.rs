use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::adapters::fs::{ensure_dir, to_pretty_json, write_atomic};
use crate::domain::{
    check_profile_identity, validate_profile_name, ClaudeConfig, ConfigProfile, DomainError,
    PlatformInfo, PROFILE_SUFFIX,
};
use crate::ports::{ConfigStore, ProfileStore};

const TARGET_DIR: &str = "profiles directory";

fn profile_target(name: &str) -> String {
    format!("profile '{}'", name)
}

/// Profile store keeping one JSON file per profile under `profiles/`.
pub struct JsonProfileStore {
    platform: PlatformInfo,
    config_store: Arc<dyn ConfigStore>,
    write_lock: Mutex<()>,
}

impl JsonProfileStore {
    pub fn new(platform: PlatformInfo, config_store: Arc<dyn ConfigStore>) -> Self {
        info!(profiles_dir = ?platform.profiles_dir(), "ProfileStore initialized");
        Self {
            platform,
            config_store,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the file backing `name`. Names are not trimmed here.
    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{}{}", name, PROFILE_SUFFIX))
    }

    /// Like `profile_path`, but refuses names that would leave the
    /// profiles directory.
    fn checked_profile_path(&self, name: &str) -> Result<PathBuf, DomainError> {
        check_profile_identity(name)?;
        Ok(self.profile_path(name))
    }

    fn read_profile(path: &Path, name: &str) -> Result<ConfigProfile, DomainError> {
        let content =
            fs::read_to_string(path).map_err(|e| DomainError::read(profile_target(name), e))?;
        serde_json::from_str(&content).map_err(|e| DomainError::parse(profile_target(name), e))
    }
}

impl ProfileStore for JsonProfileStore {
    fn profiles_dir(&self) -> PathBuf {
        self.platform.profiles_dir()
    }

    fn save(
        &self,
        name: &str,
        auth_token: &str,
        base_url: &str,
        description: &str,
    ) -> Result<ConfigProfile, DomainError> {
        let name = validate_profile_name(name)?;
        let _guard = self.write_lock.lock();

        ensure_dir(
            &self.profiles_dir(),
            self.platform.file_permissions(true),
            TARGET_DIR,
        )?;

        let mut profile = ConfigProfile::new(
            name,
            auth_token,
            base_url,
            description,
            Utc::now().fixed_offset(),
        );

        let profile_path = self.profile_path(name);
        if profile_path.exists() {
            match Self::read_profile(&profile_path, name) {
                Ok(existing) => profile = profile.carry_created_at(&existing),
                Err(e) => {
                    debug!(path = ?profile_path, error = %e, "Existing profile unreadable, using fresh createdAt")
                }
            }
        }

        let content = to_pretty_json(&profile, &profile_target(name))?;
        write_atomic(
            &profile_path,
            &content,
            self.platform.file_permissions(false),
            &profile_target(name),
        )?;

        info!(profile = %name, path = ?profile_path, "Profile saved");
        Ok(profile)
    }

    fn load(&self, name: &str) -> Result<ConfigProfile, DomainError> {
        let profile_path = self.checked_profile_path(name)?;
        if !profile_path.exists() {
            return Err(DomainError::NotFound(format!("Profile '{}' not found", name)));
        }

        debug!(path = ?profile_path, "Loading profile");
        Self::read_profile(&profile_path, name)
    }

    fn load_all(&self) -> Result<Vec<ConfigProfile>, DomainError> {
        let profiles_dir = self.profiles_dir();

        if !profiles_dir.exists() {
            debug!(path = ?profiles_dir, "Profiles directory does not exist yet");
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(&profiles_dir).map_err(|e| DomainError::read(TARGET_DIR, e))?;

        let mut profiles = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DomainError::read(TARGET_DIR, e))?;
            let path = entry.path();

            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                continue;
            }

            let file_name = entry.file_name();
            let Some(stem) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(PROFILE_SUFFIX))
            else {
                continue;
            };

            match Self::read_profile(&path, stem) {
                Ok(profile) => profiles.push(profile),
                Err(e) => warn!(path = ?path, error = %e, "Skipping unreadable profile"),
            }
        }

        debug!(count = profiles.len(), "Profiles loaded");
        Ok(profiles)
    }

    fn apply(&self, name: &str) -> Result<ClaudeConfig, DomainError> {
        let profile = self.load(name).map_err(|e| match e {
            DomainError::Validation(msg) => DomainError::Validation(msg),
            other => DomainError::NotFound(format!("Failed to load profile '{}': {}", name, other)),
        })?;

        let config = self
            .config_store
            .save(&profile.auth_token, &profile.base_url)?;

        info!(profile = %name, "Profile applied");
        Ok(config)
    }

    fn delete(&self, name: &str) -> Result<(), DomainError> {
        let profile_path = self.checked_profile_path(name)?;
        let _guard = self.write_lock.lock();

        if !profile_path.exists() {
            return Err(DomainError::NotFound(format!("Profile '{}' not found", name)));
        }

        fs::remove_file(&profile_path).map_err(|e| DomainError::delete(profile_target(name), e))?;

        info!(profile = %name, "Profile deleted");
        Ok(())
    }
}
