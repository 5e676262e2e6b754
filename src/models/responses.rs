//! Response DTOs for the API
//!
//! Defines the structure of JSON error bodies. Successful responses serialize
//! the resource records directly.

use serde::Serialize;

/// Error response body for rejected authentication
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Name and message of an unhandled error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
}

/// Body of a 500 response produced by the error handler.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerErrorResponse {
    /// `{"error": {"message": "server error"}}`
    Redacted { error: ErrorDetail },
    /// `{"message": ..., "error": {"name": ..., "message": ...}}`
    Detailed { message: String, error: ErrorDetail },
}

impl ServerErrorResponse {
    pub fn redacted() -> Self {
        ServerErrorResponse::Redacted {
            error: ErrorDetail {
                name: None,
                message: "server error".to_string(),
            },
        }
    }

    pub fn detailed(name: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        ServerErrorResponse::Detailed {
            message: message.clone(),
            error: ErrorDetail {
                name: Some(name.into()),
                message,
            },
        }
    }
}
