//! API error types.

use bankrisk_config::ConfigError;
use bankrisk_risk::RiskError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request was rejected before or during validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A calculation failed on valid input.
    #[error("Calculation failed: {0}")]
    Computation(String),
}

impl ApiError {
    /// Returns true for errors caused by the request itself.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Computation(_) => "CALCULATION_ERROR",
        }
    }

    /// The message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) | ApiError::Computation(msg) => msg,
        }
    }
}

/// Error body details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code, see [`ApiError::code`].
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

// Conversions from domain errors
impl From<RiskError> for ApiError {
    fn from(err: RiskError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Computation(err.to_string())
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Engine(inner) => inner.into(),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(format!("malformed request: {err}"))
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
