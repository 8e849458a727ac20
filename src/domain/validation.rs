//! Credential sanity checks for the GUI.
//!
//! None of the save paths call these; a token or URL that fails them can
//! still be stored.

use serde::Serialize;
use url::Url;

/// Prefix carried by Anthropic API keys.
const AUTH_TOKEN_PREFIX: &str = "sk-";

/// Outcome of checking a credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCheck {
    pub auth_token_valid: bool,
    pub base_url_valid: bool,
}

impl CredentialCheck {
    pub fn new(auth_token: &str, base_url: &str) -> Self {
        Self {
            auth_token_valid: is_valid_auth_token(auth_token),
            base_url_valid: is_valid_base_url(base_url),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.auth_token_valid && self.base_url_valid
    }
}

pub fn is_valid_auth_token(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token.starts_with(AUTH_TOKEN_PREFIX)
}

/// An absolute http(s) URL with a host.
pub fn is_valid_base_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token() {
        assert!(is_valid_auth_token("sk-ant-123"));
        assert!(is_valid_auth_token("  sk-abc  "));
        assert!(!is_valid_auth_token(""));
        assert!(!is_valid_auth_token("   "));
        assert!(!is_valid_auth_token("pk-abc"));
    }

    #[test]
    fn test_base_url() {
        assert!(is_valid_base_url("https://api.example.com"));
        assert!(is_valid_base_url("http://localhost:8080/v1"));
        assert!(!is_valid_base_url(""));
        assert!(!is_valid_base_url("ftp://files.example.com"));
        assert!(!is_valid_base_url("api.example.com"));
    }

    #[test]
    fn test_credential_check() {
        let check = CredentialCheck::new("sk-abc", "https://api.example.com");
        assert!(check.is_valid());

        let check = CredentialCheck::new("abc", "https://api.example.com");
        assert!(!check.auth_token_valid);
        assert!(check.base_url_valid);
        assert!(!check.is_valid());
    }
}
