//! Application error types
//!
//! Errors raised while wiring up and running the server, plus the JSON error
//! body shared by every API response.

use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Listener and serve loop errors
    #[error("Server error: {0}")]
    Server(String),
}

/// Error body returned by the API: `{ "message", "code" }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Config("DATABASE_URL is required".into()).to_string(),
            "Configuration error: DATABASE_URL is required"
        );
        assert_eq!(
            AppError::Database("pool timed out".into()).to_string(),
            "Database error: pool timed out"
        );
    }

    #[test]
    fn test_error_response_body() {
        let body = serde_json::to_value(ErrorResponse::new("User not found: 1", "UNKNOWN_USER"))
            .unwrap();
        assert_eq!(body["message"], "User not found: 1");
        assert_eq!(body["code"], "UNKNOWN_USER");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_error_response_details() {
        let body = ErrorResponse::new("Validation error", "VALIDATION_ERROR")
            .with_details(json!({ "typeID": ["invalid_id"] }));
        let body = serde_json::to_value(body).unwrap();
        assert_eq!(body["details"]["typeID"][0], "invalid_id");
    }
}
