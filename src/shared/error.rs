//! Shared Error Types
//!
//! Error types for the API client and push channel. All variants are
//! `Send + Sync` and can cross thread boundaries.

use thiserror::Error;

/// Errors produced by API calls and push-channel handling
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout, ...)
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// Non-success HTTP status from the backend
    #[error("Request failed: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body text, if any
        body: String,
    },

    /// JSON serialization or deserialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Data validation failure
    #[error("Validation error in field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl ApiError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Create a new HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http { status, body: body.into() }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization { message: message.into() }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether retrying the request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network { .. } => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let error = ApiError::http(404, "not found");
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("title", "must not be empty");
        match error {
            ApiError::Validation { field, message } => {
                assert_eq!(field, "title");
                assert_eq!(message, "must not be empty");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::network("connection refused").is_retryable());
        assert!(ApiError::http(503, "unavailable").is_retryable());
        assert!(!ApiError::http(404, "missing").is_retryable());
        assert!(!ApiError::serialization("bad json").is_retryable());
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid }");
        let err: ApiError = result.unwrap_err().into();
        match err {
            ApiError::Serialization { .. } => {}
            _ => panic!("Expected Serialization from serde error"),
        }
    }
}
