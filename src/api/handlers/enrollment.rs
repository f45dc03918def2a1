//! Enrollment listing and recommendation handlers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    EnrollmentDto, EnrollmentListParams, RecommendationDto, RecommendationResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, NextCurlError};

/// `GET /enrollments`: List enrollments, optionally for one student.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] for a blank `student`.
#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    tag = "Enrollments",
    summary = "List enrollments",
    params(EnrollmentListParams),
    responses(
        (status = 200, description = "Enrollments in creation order", body = Vec<EnrollmentDto>),
        (status = 400, description = "Invalid student filter", body = ErrorResponse),
    )
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    Query(params): Query<EnrollmentListParams>,
) -> Result<impl IntoResponse, NextCurlError> {
    let enrollments = state
        .catalog_service
        .list_enrollments(params.student.as_deref())
        .await?;
    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// `GET /students/{student}/recommendations`: Popular courses the
/// student has not enrolled in.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] for a blank student name.
#[utoipa::path(
    get,
    path = "/api/v1/students/{student}/recommendations",
    tag = "Enrollments",
    summary = "Recommend courses",
    description = "Ranks courses the student is not enrolled in by enrollment count, keeping only the most popular cluster.",
    params(("student" = String, Path, description = "Student name")),
    responses(
        (status = 200, description = "Recommendations", body = RecommendationResponse),
        (status = 400, description = "Invalid student", body = ErrorResponse),
    )
)]
pub async fn recommendations(
    State(state): State<AppState>,
    Path(student): Path<String>,
) -> Result<impl IntoResponse, NextCurlError> {
    let recs = state.catalog_service.recommend(&student).await?;
    Ok(Json(RecommendationResponse {
        student: student.trim().to_string(),
        recommendations: recs.into_iter().map(RecommendationDto::from).collect(),
    }))
}

/// Enrollment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/enrollments", get(list_enrollments))
        .route("/students/{student}/recommendations", get(recommendations))
}
