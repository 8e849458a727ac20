use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::adapters::fs::{ensure_dir, to_pretty_json, write_atomic};
use crate::domain::{ClaudeConfig, DomainError, PlatformInfo};
use crate::ports::ConfigStore;

const TARGET_FILE: &str = "configuration file";
const TARGET_DIR: &str = "configuration directory";
const TARGET_DOC: &str = "configuration";

/// JSON-backed store for Claude Code's `settings.json`.
pub struct JsonConfigStore {
    platform: PlatformInfo,
    write_lock: Mutex<()>,
}

impl JsonConfigStore {
    pub fn new(platform: PlatformInfo) -> Self {
        info!(path = ?platform.config_file_path(), "ConfigStore initialized");
        Self {
            platform,
            write_lock: Mutex::new(()),
        }
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<ClaudeConfig, DomainError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Err(DomainError::NotFound(
                "Claude Code configuration file not found".to_string(),
            ));
        }

        debug!(path = ?config_path, "Loading configuration");
        let content =
            fs::read_to_string(&config_path).map_err(|e| DomainError::read(TARGET_FILE, e))?;
        let config: ClaudeConfig =
            serde_json::from_str(&content).map_err(|e| DomainError::parse(TARGET_FILE, e))?;

        Ok(config)
    }

    fn save(&self, auth_token: &str, base_url: &str) -> Result<ClaudeConfig, DomainError> {
        let _guard = self.write_lock.lock();
        let config_path = self.config_path();

        // Whatever is on disk is only a merge base; a bad one never blocks the save.
        let base = match self.load() {
            Ok(existing) => existing,
            Err(DomainError::NotFound(_)) => ClaudeConfig::default(),
            Err(e) => {
                warn!(path = ?config_path, error = %e, "Ignoring unreadable configuration");
                ClaudeConfig::default()
            }
        };
        let config = base.with_credentials(auth_token, base_url);

        ensure_dir(
            &self.config_dir(),
            self.platform.file_permissions(true),
            TARGET_DIR,
        )?;

        let content = to_pretty_json(&config, TARGET_DOC)?;
        write_atomic(
            &config_path,
            &content,
            self.platform.file_permissions(false),
            TARGET_FILE,
        )?;

        info!(path = ?config_path, "Configuration saved");
        Ok(config)
    }

    fn delete(&self) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock();
        let config_path = self.config_path();

        if !config_path.exists() {
            return Err(DomainError::NotFound(
                "Claude Code configuration file not found".to_string(),
            ));
        }

        fs::remove_file(&config_path).map_err(|e| DomainError::delete(TARGET_FILE, e))?;

        info!(path = ?config_path, "Configuration deleted");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.platform.config_file_path()
    }

    fn config_dir(&self) -> PathBuf {
        self.platform.config_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, OsKind};
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> JsonConfigStore {
        JsonConfigStore::new(PlatformInfo::new(OsKind::Linux, temp.path(), None))
    }

    #[test]
    fn test_config_store_paths() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.config_path().ends_with(".claude/settings.json"));
        assert_eq!(store.config_dir(), temp.path().join(".claude"));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = store_in(&temp).load().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Claude Code configuration file not found");
    }

    #[test]
    fn test_save_without_prior_file_creates_it() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let saved = store.save("sk-abc", "https://api.example.com").unwrap();
        assert!(store.config_path().is_file());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.env.auth_token, "sk-abc");
        assert_eq!(loaded.env.base_url, "https://api.example.com");

        let raw = fs::read_to_string(store.config_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["permissions"]["allow"], serde_json::json!([]));
        assert_eq!(value["permissions"]["deny"], serde_json::json!([]));
    }

    #[test]
    fn test_save_preserves_permissions() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.config_dir()).unwrap();
        fs::write(
            store.config_path(),
            r#"{"env":{"ANTHROPIC_AUTH_TOKEN":"old","ANTHROPIC_BASE_URL":"old"},
               "permissions":{"allow":["Bash(git status)"],"deny":["Read(.env)"]}}"#,
        )
        .unwrap();

        let saved = store.save("new", "https://new.example.com").unwrap();
        assert_eq!(saved.permissions.allow, vec!["Bash(git status)".to_string()]);
        assert_eq!(saved.permissions.deny, vec!["Read(.env)".to_string()]);
        assert_eq!(store.load().unwrap(), saved);
    }

    #[test]
    fn test_corrupt_file_is_parse_error_but_save_recovers() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.config_dir()).unwrap();
        fs::write(store.config_path(), "not json").unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Failed to parse configuration file"));

        let saved = store.save("tok", "url").unwrap();
        assert_eq!(saved.env.auth_token, "tok");
        assert!(saved.permissions.allow.is_empty());
        assert!(store.load().is_ok());
    }

    #[test]
    fn test_save_fails_when_dir_cannot_be_created() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".claude"), "a file, not a dir").unwrap();

        let err = store_in(&temp).save("tok", "url").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DirCreate);
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert_eq!(store.delete().unwrap_err().kind(), ErrorKind::NotFound);

        store.save("tok", "url").unwrap();
        store.delete().unwrap();
        assert!(!store.config_path().exists());
    }

    #[test]
    fn test_save_keeps_permissions_next_to_null_env() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.config_dir()).unwrap();
        fs::write(
            store.config_path(),
            r#"{"env":null,"permissions":{"allow":["Bash(ls)"],"deny":[]}}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.env.auth_token, "");
        assert_eq!(loaded.permissions.allow, vec!["Bash(ls)".to_string()]);

        let saved = store.save("t", "u").unwrap();
        assert_eq!(saved.permissions.allow, vec!["Bash(ls)".to_string()]);
        assert_eq!(store.load().unwrap().permissions.allow, vec!["Bash(ls)".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.config_path()).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.to_string().starts_with("Failed to read configuration file"));
    }
}
