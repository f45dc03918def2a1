//! Lesson handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateLessonRequest, LessonDto, LessonListParams, UpdateLessonRequest};
use crate::app_state::AppState;
use crate::domain::{CourseId, LessonId};
use crate::error::{ErrorResponse, NextCurlError};

/// `POST /lessons`: Add a lesson to a course.
///
/// # Errors
///
/// Returns [`NextCurlError::CourseNotFound`] or
/// [`NextCurlError::InvalidRequest`].
#[utoipa::path(
    post,
    path = "/api/v1/lessons",
    tag = "Lessons",
    summary = "Create a lesson",
    request_body = CreateLessonRequest,
    responses(
        (status = 201, description = "Lesson created", body = LessonDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(req): Json<CreateLessonRequest>,
) -> Result<impl IntoResponse, NextCurlError> {
    let lesson = state
        .catalog_service
        .create_lesson(
            CourseId::from_uuid(req.course_id),
            &req.title,
            &req.content,
            req.order,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(LessonDto::from(lesson))))
}

/// `GET /lessons`: List lessons, optionally for one course.
///
/// # Errors
///
/// Returns [`NextCurlError::CourseNotFound`] if `course_id` names a
/// missing course.
#[utoipa::path(
    get,
    path = "/api/v1/lessons",
    tag = "Lessons",
    summary = "List lessons",
    params(LessonListParams),
    responses(
        (status = 200, description = "Lessons in ascending order", body = Vec<LessonDto>),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<LessonListParams>,
) -> Result<impl IntoResponse, NextCurlError> {
    let lessons = state
        .catalog_service
        .list_lessons(params.course_id.map(CourseId::from_uuid))
        .await?;
    Ok(Json(
        lessons.into_iter().map(LessonDto::from).collect::<Vec<_>>(),
    ))
}

/// `GET /lessons/{id}`: Lesson details.
///
/// # Errors
///
/// Returns [`NextCurlError::LessonNotFound`] if the lesson does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/lessons/{id}",
    tag = "Lessons",
    summary = "Get a lesson",
    params(("id" = uuid::Uuid, Path, description = "Lesson UUID")),
    responses(
        (status = 200, description = "Lesson", body = LessonDto),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
    )
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, NextCurlError> {
    let lesson = state
        .catalog_service
        .get_lesson(LessonId::from_uuid(id))
        .await?;
    Ok(Json(LessonDto::from(lesson)))
}

/// `PATCH /lessons/{id}`: Partially update a lesson.
///
/// # Errors
///
/// Returns [`NextCurlError::LessonNotFound`] or
/// [`NextCurlError::InvalidRequest`].
#[utoipa::path(
    patch,
    path = "/api/v1/lessons/{id}",
    tag = "Lessons",
    summary = "Update a lesson",
    params(("id" = uuid::Uuid, Path, description = "Lesson UUID")),
    request_body = UpdateLessonRequest,
    responses(
        (status = 200, description = "Updated lesson", body = LessonDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
    )
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateLessonRequest>,
) -> Result<impl IntoResponse, NextCurlError> {
    let lesson = state
        .catalog_service
        .update_lesson(LessonId::from_uuid(id), req.into())
        .await?;
    Ok(Json(LessonDto::from(lesson)))
}

/// `DELETE /lessons/{id}`: Remove a lesson.
///
/// # Errors
///
/// Returns [`NextCurlError::LessonNotFound`] if the lesson does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/lessons/{id}",
    tag = "Lessons",
    summary = "Delete a lesson",
    params(("id" = uuid::Uuid, Path, description = "Lesson UUID")),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
    )
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, NextCurlError> {
    state
        .catalog_service
        .delete_lesson(LessonId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lesson routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", post(create_lesson).get(list_lessons))
        .route(
            "/lessons/{id}",
            get(get_lesson).patch(update_lesson).delete(delete_lesson),
        )
}
