use serde::{Deserialize, Deserializer, Serialize};

/// Credential section of the Claude Code settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvSection {
    #[serde(rename = "ANTHROPIC_AUTH_TOKEN", deserialize_with = "null_as_default")]
    pub auth_token: String,
    #[serde(rename = "ANTHROPIC_BASE_URL", deserialize_with = "null_as_default")]
    pub base_url: String,
}

/// Tool permission lists. Never null on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub allow: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deny: Vec<String>,
}

/// The active Claude Code configuration (`settings.json`).
///
/// Only the fields below are modelled. Anything else in the file is
/// dropped when the document is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaudeConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: EnvSection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: PermissionsSection,
}

impl ClaudeConfig {
    /// Replace the credentials, keeping the permission lists.
    pub fn with_credentials(mut self, auth_token: &str, base_url: &str) -> Self {
        self.env.auth_token = auth_token.to_string();
        self.env.base_url = base_url.to_string();
        self
    }
}

/// JSON `null` reads as the zero value, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with rotation.
    pub file_logging: bool,
    /// Maximum number of log files to keep.
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
            max_files: 7,
        }
    }
}

/// Settings of the profile manager itself (not Claude Code's).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub logging: LoggingConfig,
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }
}
