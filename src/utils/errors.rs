//! Error handling for Savoten
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Main error type for Savoten application
#[derive(Error, Debug)]
pub enum SavotenError {
    #[error("{entity} has no id")]
    MissingId { entity: &'static str },

    #[error("{entity} {id} is not stored")]
    NotStored { entity: &'static str, id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Event item not found: {event_item_id}")]
    EventItemNotFound { event_item_id: i64 },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Savoten operations
pub type Result<T> = std::result::Result<T, SavotenError>;

impl From<config::ConfigError> for SavotenError {
    fn from(err: config::ConfigError) -> Self {
        SavotenError::Config(err.to_string())
    }
}

impl SavotenError {
    /// True for errors raised when an entity's identity does not match the store
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            SavotenError::MissingId { .. } | SavotenError::NotStored { .. }
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SavotenError::Config(_) => ErrorSeverity::Critical,
            SavotenError::Io(_) => ErrorSeverity::Error,
            SavotenError::MissingId { .. } | SavotenError::NotStored { .. } => {
                ErrorSeverity::Warning
            }
            SavotenError::InvalidInput(_) | SavotenError::DuplicateEmail(_) => ErrorSeverity::Info,
            SavotenError::EventNotFound { .. }
            | SavotenError::EventItemNotFound { .. }
            | SavotenError::UserNotFound { .. } => ErrorSeverity::Info,
        }
    }

    /// HTTP status the web layer answers with
    pub fn status_code(&self) -> StatusCode {
        match self {
            SavotenError::EventNotFound { .. }
            | SavotenError::EventItemNotFound { .. }
            | SavotenError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            SavotenError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SavotenError::MissingId { .. }
            | SavotenError::NotStored { .. }
            | SavotenError::DuplicateEmail(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SavotenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, severity = %self.severity(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
