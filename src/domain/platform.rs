use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::DomainError;

/// Name of the directory Claude Code keeps its settings in.
const CLAUDE_DIR_UNIX: &str = ".claude";
const CLAUDE_DIR_WINDOWS: &str = "claude";

const SETTINGS_FILE: &str = "settings.json";
const PROFILES_DIR: &str = "profiles";

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// Operating system family, as far as path resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

impl OsKind {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }
}

/// Everything path resolution needs to know about the host.
///
/// Captured once at startup and handed to the stores, so no store ever
/// queries the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    os: OsKind,
    home_dir: PathBuf,
    app_data: Option<PathBuf>,
}

impl PlatformInfo {
    pub fn new(os: OsKind, home_dir: impl Into<PathBuf>, app_data: Option<PathBuf>) -> Self {
        Self {
            os,
            home_dir: home_dir.into(),
            app_data,
        }
    }

    /// Detect the running host.
    ///
    /// Fails with `HomeDirUnavailable` instead of resolving against an
    /// empty path.
    pub fn detect() -> Result<Self, DomainError> {
        let home_dir = dirs::home_dir()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(DomainError::HomeDirUnavailable)?;

        let app_data = std::env::var_os("APPDATA")
            .filter(|v: &OsString| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self::new(OsKind::current(), home_dir, app_data))
    }

    pub fn os(&self) -> OsKind {
        self.os
    }

    pub fn home_dir(&self) -> &PathBuf {
        &self.home_dir
    }

    pub fn is_windows(&self) -> bool {
        self.os == OsKind::Windows
    }

    pub fn is_macos(&self) -> bool {
        self.os == OsKind::MacOs
    }

    pub fn is_linux(&self) -> bool {
        self.os == OsKind::Linux
    }

    /// `%APPDATA%`, or `<home>/AppData/Roaming` when the variable is unset.
    fn roaming_dir(&self) -> PathBuf {
        self.app_data
            .clone()
            .unwrap_or_else(|| self.home_dir.join("AppData").join("Roaming"))
    }

    /// Directory holding the Claude Code settings file.
    /// - Windows: %APPDATA%\claude\
    /// - everything else: ~/.claude/
    pub fn config_dir(&self) -> PathBuf {
        match self.os {
            OsKind::Windows => self.roaming_dir().join(CLAUDE_DIR_WINDOWS),
            OsKind::MacOs | OsKind::Linux | OsKind::Unknown => {
                self.home_dir.join(CLAUDE_DIR_UNIX)
            }
        }
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir().join(SETTINGS_FILE)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.config_dir().join(PROFILES_DIR)
    }

    /// Permission bits for newly created directories and files.
    ///
    /// Windows mostly ignores these, the same bits are still returned so
    /// every platform goes through one code path.
    pub fn file_permissions(&self, is_dir: bool) -> u32 {
        if is_dir {
            DIR_MODE
        } else {
            FILE_MODE
        }
    }

    /// Directory for this application's own settings and logs.
    /// - Windows: %APPDATA%\ClaudeProfiles\
    /// - macOS: ~/Library/Application Support/ClaudeProfiles/
    /// - Linux and others: ~/.config/claude-profiles/
    pub fn app_dir(&self) -> PathBuf {
        match self.os {
            OsKind::Windows => self.roaming_dir().join("ClaudeProfiles"),
            OsKind::MacOs => self
                .home_dir
                .join("Library")
                .join("Application Support")
                .join("ClaudeProfiles"),
            OsKind::Linux | OsKind::Unknown => {
                self.home_dir.join(".config").join("claude-profiles")
            }
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_dir().join("logs")
    }
}
