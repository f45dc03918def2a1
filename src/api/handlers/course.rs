//! Course handlers: create, list, get, update, delete, enroll.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CourseDetailDto, CourseDto, CourseListResponse, CreateCourseRequest, EnrollRequest,
    EnrollmentDto, PaginationParams, UpdateCourseRequest,
};
use crate::app_state::AppState;
use crate::domain::CourseId;
use crate::error::{ErrorResponse, NextCurlError};

/// `POST /courses`: Create a course.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] on invalid fields.
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = "Courses",
    summary = "Create a course",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, NextCurlError> {
    let course = state
        .catalog_service
        .create_course(&req.title, &req.description, &req.instructor)
        .await?;
    Ok((StatusCode::CREATED, Json(CourseDto::from(course))))
}

/// `GET /courses`: List courses with pagination.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "Courses",
    summary = "List courses",
    description = "Returns a paginated list of courses in creation order.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated course list", body = CourseListResponse),
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    let courses = state.catalog_service.list_courses().await;
    let (page, pagination) = params.paginate(courses);
    Json(CourseListResponse {
        data: page.into_iter().map(CourseDto::from).collect(),
        pagination,
    })
}

/// `GET /courses/{id}`: Course details with lessons.
///
/// # Errors
///
/// Returns [`NextCurlError::CourseNotFound`] if the course does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Get course details",
    params(("id" = uuid::Uuid, Path, description = "Course UUID")),
    responses(
        (status = 200, description = "Course with ordered lessons", body = CourseDetailDto),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, NextCurlError> {
    let detail = state
        .catalog_service
        .get_course(CourseId::from_uuid(id))
        .await?;
    Ok(Json(CourseDetailDto::from(detail)))
}

/// `PATCH /courses/{id}`: Partially update a course.
///
/// # Errors
///
/// Returns [`NextCurlError::CourseNotFound`] or
/// [`NextCurlError::InvalidRequest`].
#[utoipa::path(
    patch,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Update a course",
    params(("id" = uuid::Uuid, Path, description = "Course UUID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Updated course", body = CourseDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, NextCurlError> {
    let course = state
        .catalog_service
        .update_course(CourseId::from_uuid(id), req.into())
        .await?;
    Ok(Json(CourseDto::from(course)))
}

/// `DELETE /courses/{id}`: Remove a course with its lessons and
/// enrollments.
///
/// # Errors
///
/// Returns [`NextCurlError::CourseNotFound`] if the course does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Delete a course",
    params(("id" = uuid::Uuid, Path, description = "Course UUID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, NextCurlError> {
    state
        .catalog_service
        .delete_course(CourseId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /courses/{id}/enroll`: Enroll a student.
///
/// # Errors
///
/// Returns [`NextCurlError::AlreadyEnrolled`] for a repeat enrollment,
/// [`NextCurlError::CourseNotFound`] for a missing course.
#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/enroll",
    tag = "Courses",
    summary = "Enroll in a course",
    params(("id" = uuid::Uuid, Path, description = "Course UUID")),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentDto),
        (status = 400, description = "Already enrolled or invalid student", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<EnrollRequest>,
) -> Result<impl IntoResponse, NextCurlError> {
    let enrollment = state
        .catalog_service
        .enroll(CourseId::from_uuid(id), &req.student)
        .await?;
    Ok((StatusCode::CREATED, Json(EnrollmentDto::from(enrollment))))
}

/// Course routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course).get(list_courses))
        .route(
            "/courses/{id}",
            get(get_course).patch(update_course).delete(delete_course),
        )
        .route("/courses/{id}/enroll", post(enroll))
}
