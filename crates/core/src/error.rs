//! Error model shared by the catalog, basket and review flows.

use thiserror::Error;

/// Result type used across the pure layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic, local failures (validation, caller contract, identity).
///
/// Anything that crossed the network belongs in [`ServiceError`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User input failed validation (e.g. empty comment, unknown sort mode).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A caller broke a function contract (e.g. zero page size).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Failure reported by a remote collaborator (transport or non-success reply).
///
/// A `ServiceError` never mutates local state: the flows leave the last
/// confirmed value in place and surface the message to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Short message suitable for an inline notice.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Network(_) | ServiceError::Timeout => {
                "Could not reach the shop. Please try again.".to_string()
            }
            ServiceError::Api { status, .. } if *status == 400 || *status == 403 => {
                "Your session has expired. Please reload the page.".to_string()
            }
            ServiceError::Api { .. } | ServiceError::Parse(_) => {
                "The shop could not process your request.".to_string()
            }
        }
    }
}
