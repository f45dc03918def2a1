//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::domain::Catalog;
use crate::service::CatalogService;
use crate::ws::ConnectionTracker;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog service for all course business logic.
    pub catalog_service: Arc<CatalogService>,
    /// Open echo connection counter.
    pub connections: ConnectionTracker,
}

impl AppState {
    /// Builds a fresh state with an empty catalog.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        let catalog = Arc::new(Catalog::new());
        Self {
            catalog_service: Arc::new(CatalogService::new(catalog, config.recommendation_limit)),
            connections: ConnectionTracker::new(),
        }
    }
}
