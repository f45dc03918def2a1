//! Shared helpers for integration tests.

#![allow(dead_code, clippy::expect_used)]

use std::net::SocketAddr;
use std::time::Duration;

use next_curl::app_state::AppState;
use next_curl::config::ServerConfig;
use next_curl::server::{build_app, serve};

/// Starts the full application on an OS-assigned port and returns its
/// address.
pub async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let app = build_app(AppState::new(&ServerConfig::default()));
    tokio::spawn(async move {
        let _ = serve(listener, app).await;
    });
    addr
}

/// Reads `active_connections` from `/health`.
pub async fn active_connections(addr: SocketAddr) -> u64 {
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("health request")
        .json()
        .await
        .expect("health body");
    body["active_connections"].as_u64().expect("active_connections field")
}

/// Polls `/health` until `active_connections` equals `expected`.
///
/// Returns the last observed value.
pub async fn wait_for_active(addr: SocketAddr, expected: u64) -> u64 {
    let mut seen = active_connections(addr).await;
    for _ in 0..100 {
        if seen == expected {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        seen = active_connections(addr).await;
    }
    seen
}
