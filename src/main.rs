//! Cards API - A small REST service over in-memory cards and lists

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cards_api::config::Environment;
use cards_api::{create_router, AppState, Config};

/// Main entry point for the Cards API server.
///
/// # Startup Sequence
/// 1. Load `.env` if present, then configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Create the seeded resource store
/// 4. Create Axum router with all endpoints and middleware
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    init_tracing(config.environment);

    info!("Starting Cards API Server");
    info!(
        "Configuration loaded: environment={:?}, port={}, auth_placement={:?}, allowed_origin={}",
        config.environment, config.server_port, config.auth_placement, config.allowed_origin
    );
    if config.api_token.is_none() {
        warn!("API_TOKEN is not set, every request will be rejected as unauthorized");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = AppState::from_config(config);
    info!("Resource store initialized");

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// JSON lines in production, human-readable output otherwise.
///
/// Defaults to "info" level, can be overridden with RUST_LOG env var.
fn init_tracing(environment: Environment) {
    let fmt_layer = if environment.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cards_api=info,tower_http=info".into()),
        )
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
