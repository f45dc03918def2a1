//! # next-curl
//!
//! Realtime and web backend for the Next-curl educational platform.
//!
//! One listener (port 4000 by default) serves:
//!
//! - a WebSocket **echo** endpoint at `/` and `/ws`: every text or binary
//!   message is sent back to its sender unchanged;
//! - the static **homepage** at `/home`;
//! - an in-memory **course catalog** REST API under `/api/v1` with
//!   popularity-based recommendations.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── WS echo (ws/) ── ConnectionTracker
//!     ├── Homepage (page/)
//!     ├── REST Handlers (api/)
//!     │       │
//!     │       └── CatalogService (service/)
//!     │               │
//!     │               └── Catalog + recommend (domain/)
//!     └── /health
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod page;
pub mod server;
pub mod service;
pub mod ws;
