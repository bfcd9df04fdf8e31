//! Error taxonomy for API operations.
//!
//! Provides structured error classification for everything the remote
//! endpoints can do wrong, plus the shared validation-error shape that
//! client-side checks synthesize so one rendering branch handles both.

use serde::Deserialize;
use thiserror::Error;

/// Field-level validation messages, as the server reports them.
///
/// Local validation (email, review rating/text) fills the same shape,
/// so the error-rendering logic never needs to know the origin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    #[serde(default)]
    pub rating_value_error: Option<String>,
    #[serde(default)]
    pub review_text_value_error: Option<String>,
    #[serde(default)]
    pub email_value_error: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.rating_value_error.is_none()
            && self.review_text_value_error.is_none()
            && self.email_value_error.is_none()
    }
}

/// Errors that can occur during data and user operations.
///
/// Kept cloneable and comparable: errors are state (`data_error`,
/// `login_error`), not just control flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401: the session is not authorized.
    #[error("authorization required")]
    Unauthorized,

    /// HTTP 404: the referenced resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// Malformed input, reported by the server or synthesized locally.
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// Any other non-success response.
    #[error("request failed with status {status}")]
    BadRequest { status: u16 },

    /// Transport failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// The HTTP status this error corresponds to, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::NotFound => Some(404),
            ApiError::Validation(_) => Some(400),
            ApiError::BadRequest { status } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// Error class string, stable across variants.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::NotFound => "not_found",
            ApiError::Validation(_) => "validation",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::Network(_) => "network",
        }
    }
}
