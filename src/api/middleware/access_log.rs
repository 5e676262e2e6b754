//! One log line per request.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::AppState;

/// Logs method, path, status, length, and latency once the response is ready.
///
/// Outside production the line also carries the remote address, HTTP version,
/// and user agent.
pub async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let status = response.status().as_u16();
    let length = response
        .body()
        .size_hint()
        .exact()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());

    if state.config.environment.is_production() {
        info!(%method, %uri, status, %length, elapsed_ms, "request");
    } else {
        info!(
            %remote_addr,
            %method,
            %uri,
            ?version,
            status,
            %length,
            %user_agent,
            elapsed_ms,
            "request"
        );
    }

    response
}
