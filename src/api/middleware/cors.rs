//! Origin allow-list check and CORS response headers.

use axum::{
    extract::{Request, State},
    http::{header, request::Parts, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::api::AppState;
use crate::error::ApiError;

/// Requests without an `Origin` header are same-origin or non-browser and pass.
pub fn is_allowed_origin(origin: Option<&HeaderValue>, allowed: &str) -> bool {
    origin.map_or(true, |origin| origin.as_bytes() == allowed.as_bytes())
}

/// Fails requests from origins other than the configured one before anything
/// else sees them. The failure is an unhandled error, rendered by the error
/// handler.
pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN);
    if !is_allowed_origin(origin, &state.config.allowed_origin) {
        return ApiError::CorsRejected.into_response();
    }

    next.run(request).await
}

/// CORS headers and preflight answers for the allowed origin.
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let allowed = allowed_origin.to_string();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| origin.as_bytes() == allowed.as_bytes(),
        ))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
