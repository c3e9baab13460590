//! Error types for ClickUp API operations.

use thiserror::Error;

/// Errors that can occur during ClickUp API operations.
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// Configuration is missing or incomplete.
    #[error("ClickUp configuration required: {0}")]
    ConfigMissing(String),

    /// An argument failed local validation; no request was sent.
    #[error("Invalid argument '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The token was rejected.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The requested resource does not exist or is not visible to the token.
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        error_code: Option<String>,
    },

    /// API request failed.
    #[error("ClickUp API error ({status_code}): {message}")]
    ApiError {
        message: String,
        status_code: u16,
        error_code: Option<String>,
    },

    /// Rate limited. `reset_at` is the unix time (seconds) the window resets.
    #[error("Rate limited, window resets at {reset_at:?}")]
    RateLimited { reset_at: Option<i64> },

    /// A header value could not be built from the configured token.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ClickUpError {
    /// Build a validation error.
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The HTTP status code of the failed response, if the error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The ClickUp `ECODE` attached to the failure, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::NotFound { error_code, .. } | Self::ApiError { error_code, .. } => {
                error_code.as_deref()
            }
            _ => None,
        }
    }

    /// Whether the error was raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for ClickUp operations.
pub type Result<T> = core::result::Result<T, ClickUpError>;
