//! Centralized handling of unhandled errors and panics.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::api::AppState;
use crate::error::UnhandledError;
use crate::models::ServerErrorResponse;

/// Replaces responses marked with [`UnhandledError`] by a 500 JSON body.
///
/// In production the body only says `server error`; otherwise it carries the
/// error's name and message, and the error is logged.
pub async fn handle_server_error(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let Some(err) = response.extensions().get::<UnhandledError>().cloned() else {
        return response;
    };

    let body = if state.config.environment.is_production() {
        ServerErrorResponse::redacted()
    } else {
        error!(name = err.name, "{}", err.message);
        ServerErrorResponse::detailed(err.name, err.message)
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Turns a handler panic into an unhandled-error response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    UnhandledError::new("Panic", message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{body::Body, middleware::from_fn_with_state, routing::get, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn exploding() -> &'static str {
        panic!("kaboom")
    }

    fn app(environment: Environment) -> Router {
        let state = AppState::from_config(Config {
            environment,
            ..Config::default()
        });
        Router::new()
            .route("/boom", get(exploding))
            .route("/fine", get(|| async { "fine" }))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(from_fn_with_state(state.clone(), handle_server_error))
            .with_state(state)
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_panic_detail_in_development() {
        let (status, body) = call(app(Environment::Development), "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"message": "kaboom", "error": {"name": "Panic", "message": "kaboom"}})
        );
    }

    #[tokio::test]
    async fn test_panic_redacted_in_production() {
        let (status, body) = call(app(Environment::Production), "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": {"message": "server error"}}));
    }

    #[tokio::test]
    async fn test_successful_responses_untouched() {
        let (status, body) = call(app(Environment::Production), "/fine").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[test]
    fn test_handle_panic_with_str() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.extensions().get::<UnhandledError>(),
            Some(&UnhandledError::new("Panic", "boom"))
        );
    }

    #[test]
    fn test_handle_panic_with_string() {
        let response = handle_panic(Box::new(String::from("formatted boom")));
        assert_eq!(
            response.extensions().get::<UnhandledError>().map(|e| e.message.as_str()),
            Some("formatted boom")
        );
    }

    #[test]
    fn test_handle_panic_with_other_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(
            response.extensions().get::<UnhandledError>().map(|e| e.message.as_str()),
            Some("handler panicked")
        );
    }
}
