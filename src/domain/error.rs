//! Error types returned by every Blockfrost service call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed transport-level cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<&str> for ConfigError {
    fn from(s: &str) -> Self {
        ConfigError::ParseError(s.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },
    #[error("Validation failed: {0}")]
    Multiple(String),
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(err: validator::ValidationErrors) -> Self {
        ValidationError::Multiple(err.to_string())
    }
}

/// Error body returned by the Blockfrost API on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub message: String,
}

/// The single error kind surfaced by the client.
///
/// Callers distinguish causes through [`ApiError::status`] (zero when no
/// HTTP response was received) and the display message, which always
/// carries the server's status line for HTTP failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
    #[error("{status} {reason}: {message}")]
    Http {
        status: u16,
        reason: String,
        message: String,
        body: String,
    },
    #[error("Failed to decode response ({status}): {message}")]
    Decode {
        status: u16,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Wraps a transport failure, keeping the underlying cause.
    pub fn transport(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ApiError::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Builds an HTTP error from a non-2xx response.
    ///
    /// The Blockfrost error body is used for reason and message when it
    /// parses; otherwise the canonical reason phrase and raw body are kept.
    pub fn from_response(status: u16, canonical_reason: Option<&str>, body: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(body).into_owned();
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(parsed) => ApiError::Http {
                status,
                reason: parsed.error,
                message: parsed.message,
                body: raw,
            },
            Err(_) => ApiError::Http {
                status,
                reason: canonical_reason.unwrap_or("Unknown Status").to_string(),
                message: if raw.trim().is_empty() {
                    "empty response body".to_string()
                } else {
                    raw.clone()
                },
                body: raw,
            },
        }
    }

    /// Wraps a body that did not match the expected model.
    pub fn decode(status: u16, err: serde_json::Error) -> Self {
        ApiError::Decode {
            status,
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// HTTP status code, or `0` when the failure happened before a response.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } | ApiError::Decode { status, .. } => *status,
            _ => 0,
        }
    }

    /// Raw response body for HTTP failures.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(ValidationError::from(err))
    }
}
