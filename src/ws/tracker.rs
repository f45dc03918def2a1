//! Live connection accounting.
//!
//! [`ConnectionTracker`] counts open echo connections for the health
//! endpoint. Each connection holds a [`ConnectionGuard`]; dropping the
//! guard (on close, error, or task cancellation) decrements the count, so
//! closed connections can never leak into it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Counters {
    active: AtomicUsize,
    accepted: AtomicU64,
}

/// Shared, cloneable connection counter.
#[derive(Debug, Clone, Default)]
pub struct ConnectionTracker {
    counters: Arc<Counters>,
}

impl ConnectionTracker {
    /// Creates a tracker with zero connections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a newly opened connection.
    #[must_use = "the connection is counted only while the guard is alive"]
    pub fn track(&self) -> ConnectionGuard {
        self.counters.active.fetch_add(1, Ordering::Relaxed);
        self.counters.accepted.fetch_add(1, Ordering::Relaxed);
        ConnectionGuard {
            counters: Arc::clone(&self.counters),
        }
    }

    /// Returns the number of currently open connections.
    #[must_use]
    pub fn active(&self) -> usize {
        self.counters.active.load(Ordering::Relaxed)
    }

    /// Returns the number of connections accepted since startup.
    #[must_use]
    pub fn accepted(&self) -> u64 {
        self.counters.accepted.load(Ordering::Relaxed)
    }
}

/// Keeps one connection counted while alive.
#[derive(Debug)]
pub struct ConnectionGuard {
    counters: Arc<Counters>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.counters.active.fetch_sub(1, Ordering::Relaxed);
    }
}
