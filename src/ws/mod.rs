//! WebSocket layer: upgrade handling, the echo loop, and connection
//! accounting.
//!
//! The echo endpoint answers upgrades at `/` and `/ws`. Connections share
//! nothing but the [`tracker::ConnectionTracker`] counter.

pub mod connection;
pub mod handler;
pub mod tracker;

pub use tracker::ConnectionTracker;
