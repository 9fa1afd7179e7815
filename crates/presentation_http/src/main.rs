//! RestFault HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(config.server.log_format)?;

    info!("RestFault v{} starting...", env!("CARGO_PKG_VERSION"));

    let enabled: Vec<&str> = config.faults.enabled.iter().map(|c| c.as_str()).collect();
    info!(
        resource = %config.resource.name,
        fields = config.resource.schema.len(),
        faults = ?enabled,
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let cors = cors_layer(&config.server.allowed_origins);

    let app = routes::create_router(AppState::from_config(config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);
    info!("API docs: http://{}/api-docs/openapi.json", addr);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    let _ = stop_tx.send(());

    info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, server).await {
        Ok(joined) => joined.context("Server task failed")??,
        Err(_) => warn!("Connections still open after {:?}, exiting", shutdown_timeout),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// CORS: any origin when none are configured, otherwise only the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
