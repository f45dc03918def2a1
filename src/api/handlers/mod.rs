//! REST endpoint handlers organized by resource.

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(course::routes())
        .merge(lesson::routes())
        .merge(enrollment::routes())
}
