//! API Routes
//!
//! Configures the Axum router with all endpoints and the request pipeline.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{
    create_card_handler, get_card_handler, get_list_handler, greeting_handler,
    list_cards_handler, list_lists_handler, unmatched_route_handler, AppState,
};
use super::middleware::{
    access_log, cors_layer, handle_panic, handle_server_error, reject_disallowed_origin,
    require_bearer_token, security_headers,
};
use crate::config::AuthPlacement;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Greeting
/// - `GET /card`, `POST /card` - List or create cards
/// - `GET /card/:id` - Get a card
/// - `GET /list` - List lists
/// - `GET /list/:id` - Get a list
///
/// # Middleware (outermost first)
/// - Error handler: renders unhandled errors as 500 JSON
/// - Panic catcher: reports handler panics as unhandled errors
/// - Tracing: request span
/// - Origin check: fails requests from origins not on the allow-list
/// - CORS: response headers and preflight for the allowed origin
/// - Security headers
/// - Access log
/// - Bearer-token authentication, placed per [`AuthPlacement`]
pub fn create_router(state: AppState) -> Router {
    // Answers unmatched paths and unmatched methods on known paths alike.
    let unmatched: Router = match state.config.auth_placement {
        AuthPlacement::BeforeRoutes => Router::new().fallback(unmatched_route_handler),
        // Only requests that fall through the route table are authenticated.
        AuthPlacement::AfterRoutes => Router::new()
            .fallback(unmatched_route_handler)
            .layer(from_fn_with_state(state.clone(), require_bearer_token)),
    };

    let routes = Router::new()
        .route(
            "/",
            get(greeting_handler).fallback_service(unmatched.clone()),
        )
        .route(
            "/card",
            get(list_cards_handler)
                .post(create_card_handler)
                .fallback_service(unmatched.clone()),
        )
        .route(
            "/card/:id",
            get(get_card_handler).fallback_service(unmatched.clone()),
        )
        .route(
            "/list",
            get(list_lists_handler).fallback_service(unmatched.clone()),
        )
        .route(
            "/list/:id",
            get(get_list_handler).fallback_service(unmatched.clone()),
        )
        .fallback_service(unmatched);

    let routes = match state.config.auth_placement {
        AuthPlacement::BeforeRoutes => {
            routes.layer(from_fn_with_state(state.clone(), require_bearer_token))
        }
        AuthPlacement::AfterRoutes => routes,
    };

    routes
        .layer(from_fn_with_state(state.clone(), access_log))
        .layer(from_fn(security_headers))
        .layer(cors_layer(&state.config.allowed_origin))
        .layer(from_fn_with_state(state.clone(), reject_disallowed_origin))
        // Request span only; the access log emits the per-request line.
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn_with_state(state.clone(), handle_server_error))
        .with_state(state)
}
