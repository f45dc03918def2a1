//! Service layer: business logic orchestration.
//!
//! [`CatalogService`] coordinates course, lesson and enrollment operations
//! over the shared [`crate::domain::Catalog`].

pub mod catalog_service;

pub use catalog_service::CatalogService;
