//! Error types for the API server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No card with the requested id
    #[error("Card Not Found")]
    CardNotFound,

    /// No list with the requested id
    #[error("List Not Found")]
    ListNotFound,

    /// A required field was missing or empty
    #[error("Invalid data")]
    InvalidData,

    /// Request body could not be decoded
    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },

    /// Missing or incorrect bearer token
    #[error("Unauthorized request")]
    Unauthorized,

    /// Origin header not on the allow-list
    #[error("Not allowed by CORS")]
    CorsRejected,
}

impl ApiError {
    /// Short name identifying the error kind in development error bodies.
    pub fn name(&self) -> &'static str {
        match self {
            ApiError::CardNotFound | ApiError::ListNotFound => "NotFoundError",
            ApiError::InvalidData => "ValidationError",
            ApiError::MalformedBody { .. } => "SyntaxError",
            ApiError::Unauthorized => "UnauthorizedError",
            ApiError::CorsRejected => "CorsError",
        }
    }
}

// == Unhandled Error Marker ==
/// Attached to a response's extensions when the error was not handled where it
/// occurred. The error handler middleware renders these per environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledError {
    pub name: &'static str,
    pub message: String,
}

impl UnhandledError {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

impl IntoResponse for UnhandledError {
    /// Bare 500 carrying this marker, to be filled in by the error handler.
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CardNotFound | ApiError::ListNotFound | ApiError::InvalidData => {
                let status = match self {
                    ApiError::InvalidData => StatusCode::BAD_REQUEST,
                    _ => StatusCode::NOT_FOUND,
                };
                (status, self.to_string()).into_response()
            }
            ApiError::MalformedBody { status, message } => (status, message).into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
            ApiError::CorsRejected => {
                UnhandledError::new(self.name(), self.to_string()).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        error!("Malformed request body: {}", rejection.body_text());
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API server.
pub type Result<T> = std::result::Result<T, ApiError>;
