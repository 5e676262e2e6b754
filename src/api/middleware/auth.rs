//! Bearer-token authentication.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::AppState;
use crate::error::ApiError;

/// Checks `Authorization: <scheme> <token>` against the expected token.
///
/// The header is split on whitespace and only the second part is compared.
/// With no expected token configured nothing matches.
pub fn bearer_token_matches(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return false;
    };

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .is_some_and(|token| token == expected)
}

/// Rejects requests without a valid bearer token with 401.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !bearer_token_matches(request.headers(), state.config.api_token.as_deref()) {
        error!("Unauthorized request to path: {}", request.uri().path());
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
