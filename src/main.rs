//! next-curl server entry point.
//!
//! Starts the Axum server with the WebSocket echo endpoint, the homepage
//! and the course catalog API.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use next_curl::app_state::AppState;
use next_curl::config::{LogFormat, ServerConfig};
use next_curl::server::{build_app, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting next-curl");

    // Build application
    let app = build_app(AppState::new(&config));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(
        addr = %config.listen_addr,
        "realtime server is running on ws://{}",
        config.listen_addr
    );

    serve(listener, app).await.context("server stopped")?;

    Ok(())
}
