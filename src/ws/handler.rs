//! Axum WebSocket upgrade handler.

use std::net::SocketAddr;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /` and `GET /ws`: Upgrade the HTTP connection to a WebSocket
/// echo session.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let connections = state.connections.clone();

    ws.on_failed_upgrade(move |e| tracing::warn!(%peer, error = %e, "ws upgrade failed"))
        .on_upgrade(move |socket| run_connection(socket, peer, connections.track()))
}
