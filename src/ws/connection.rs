//! Echo loop for a single WebSocket connection.
//!
//! Every text or binary message is sent straight back to the same
//! connection, unmodified. Ping/Pong is answered by the WebSocket library.
//! The loop ends when the client closes, the stream ends, or a read or
//! write fails; each of those affects only this connection.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::tracker::ConnectionGuard;
use crate::domain::ConnectionId;

/// What the echo loop does with one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Send this message back unchanged.
    Echo(Message),
    /// The client started the close handshake.
    Close,
    /// Ping/Pong, handled by the library.
    Control,
}

/// Classifies an inbound frame.
#[must_use]
pub fn classify(msg: Message) -> Inbound {
    match msg {
        Message::Text(_) | Message::Binary(_) => Inbound::Echo(msg),
        Message::Close(_) => Inbound::Close,
        Message::Ping(_) | Message::Pong(_) => Inbound::Control,
    }
}

/// Runs the echo loop until the connection ends.
///
/// `_guard` keeps the connection counted for exactly as long as this
/// future is alive.
pub async fn run_connection(socket: WebSocket, peer: SocketAddr, _guard: ConnectionGuard) {
    let connection_id = ConnectionId::new();
    tracing::info!(%connection_id, %peer, "client connected");

    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut echoed: u64 = 0;

    while let Some(msg) = ws_rx.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(%connection_id, error = %e, "ws read failed");
                break;
            }
        };

        match classify(msg) {
            Inbound::Echo(msg) => {
                log_received(connection_id, &msg);
                if let Err(e) = ws_tx.send(msg).await {
                    tracing::debug!(%connection_id, error = %e, "ws write failed");
                    break;
                }
                echoed = echoed.saturating_add(1);
            }
            // Keep polling so the library can flush its close reply; the
            // stream ends right after.
            Inbound::Close => tracing::debug!(%connection_id, "close frame received"),
            Inbound::Control => {}
        }
    }

    tracing::info!(%connection_id, %peer, echoed, "client disconnected");
}

fn log_received(connection_id: ConnectionId, msg: &Message) {
    match msg {
        Message::Text(text) => {
            tracing::info!(%connection_id, kind = "text", len = text.as_str().len(), "received");
            tracing::debug!(%connection_id, payload = %text.as_str(), "received text payload");
        }
        Message::Binary(bytes) => {
            tracing::info!(%connection_id, kind = "binary", len = bytes.len(), "received");
        }
        _ => {}
    }
}
