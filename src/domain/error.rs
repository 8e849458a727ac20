use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

/// Domain-level errors for the configuration and profile stores.
///
/// `target` names what was being touched ("configuration file",
/// "profile 'work'", ...) so the rendered message reads naturally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("Failed to read {target}: {reason}")]
    Read { target: String, reason: String },

    #[error("Failed to parse {target}: {reason}")]
    Parse { target: String, reason: String },

    #[error("Failed to serialize {target}: {reason}")]
    Serialize { target: String, reason: String },

    #[error("Failed to write {target}: {reason}")]
    Write { target: String, reason: String },

    #[error("Failed to delete {target}: {reason}")]
    Delete { target: String, reason: String },

    #[error("Failed to create {target}: {reason}")]
    DirCreate { target: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Could not resolve the user's home directory")]
    HomeDirUnavailable,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Structured error kind exposed across the facade boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Read,
    Parse,
    Serialize,
    Write,
    Delete,
    DirCreate,
    Validation,
    Initialization,
}

impl DomainError {
    pub fn read(target: impl Into<String>, reason: impl Display) -> Self {
        Self::Read {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(target: impl Into<String>, reason: impl Display) -> Self {
        Self::Parse {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn serialize(target: impl Into<String>, reason: impl Display) -> Self {
        Self::Serialize {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(target: impl Into<String>, reason: impl Display) -> Self {
        Self::Write {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn delete(target: impl Into<String>, reason: impl Display) -> Self {
        Self::Delete {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn dir_create(target: impl Into<String>, reason: impl Display) -> Self {
        Self::DirCreate {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    /// The structured kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Read { .. } => ErrorKind::Read,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Serialize { .. } => ErrorKind::Serialize,
            Self::Write { .. } => ErrorKind::Write,
            Self::Delete { .. } => ErrorKind::Delete,
            Self::DirCreate { .. } => ErrorKind::DirCreate,
            Self::Validation(_) => ErrorKind::Validation,
            Self::HomeDirUnavailable | Self::Settings(_) | Self::Logging(_) => {
                ErrorKind::Initialization
            }
        }
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Settings(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Settings(err.to_string())
    }
}
