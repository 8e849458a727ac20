use serde::Serialize;

use crate::domain::{DomainError, ErrorKind};

/// Uniform result envelope handed to the GUI.
///
/// Generic over the payload so each facade operation returns a concrete
/// type instead of an untyped `data` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ConfigResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            kind: None,
            data: Some(data),
        }
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            kind: None,
            data: None,
        }
    }

    pub fn from_error(err: &DomainError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            kind: Some(err.kind()),
            data: None,
        }
    }

    /// Wrap a store result; `message` builds the success text from the payload.
    pub fn from_result(
        result: Result<T, DomainError>,
        message: impl FnOnce(&T) -> String,
    ) -> Self {
        match result {
            Ok(data) => {
                let message = message(&data);
                Self::ok(message, data)
            }
            Err(err) => Self::from_error(&err),
        }
    }
}
