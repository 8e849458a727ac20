//! Small filesystem helpers shared by the JSON stores.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::DomainError;

/// Create `dir` and any missing parents. Idempotent.
pub fn ensure_dir(dir: &Path, mode: u32, target: &str) -> Result<(), DomainError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(dir)
        .map_err(|e| DomainError::dir_create(target, e))
}

/// Pretty-print `value` as JSON.
pub fn to_pretty_json<T: Serialize>(value: &T, target: &str) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec_pretty(value).map_err(|e| DomainError::serialize(target, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `content` to `path` atomically.
///
/// The bytes go to a sibling temp file first, which is synced and then
/// renamed over the target, so readers never observe a half-written file.
pub fn write_atomic(path: &Path, content: &[u8], mode: u32, target: &str) -> Result<(), DomainError> {
    let temp_path = temp_path(path);

    let result = (|| -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(DomainError::write(target, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        ensure_dir(&dir, 0o755, "test directory").unwrap();
        ensure_dir(&dir, 0o755, "test directory").unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_reports_target() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = ensure_dir(&blocker.join("sub"), 0o755, "profiles directory").unwrap_err();
        assert!(err.to_string().starts_with("Failed to create profiles directory"));
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");

        write_atomic(&path, b"first", 0o644, "configuration file").unwrap();
        write_atomic(&path, b"second", 0o644, "configuration file").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("settings.json");

        let err = write_atomic(&path, b"x", 0o644, "configuration file").unwrap_err();
        assert_eq!(err.kind(), crate::domain::ErrorKind::Write);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("secret.json");
        write_atomic(&path, b"{}", 0o600, "secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
