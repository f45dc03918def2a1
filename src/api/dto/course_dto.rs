//! Course DTOs for create, update, get, list and enroll.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use super::lesson_dto::LessonDto;
use crate::domain::{Course, CoursePatch, CourseWithLessons};

/// Request body for `POST /courses`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    /// Course title (1–200 chars).
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Instructor display name.
    pub instructor: String,
}

/// Request body for `PATCH /courses/{id}`. Omitted fields stay unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New instructor.
    #[serde(default)]
    pub instructor: Option<String>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            instructor: req.instructor,
        }
    }
}

/// Course representation in responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseDto {
    /// Course identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Instructor display name.
    pub instructor: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.into(),
            title: course.title,
            description: course.description,
            instructor: course.instructor,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Course detail for `GET /courses/{id}`, including ordered lessons.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailDto {
    /// Course identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Instructor display name.
    pub instructor: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Lessons in ascending `order`.
    pub lessons: Vec<LessonDto>,
}

impl From<CourseWithLessons> for CourseDetailDto {
    fn from(value: CourseWithLessons) -> Self {
        let CourseWithLessons { course, lessons } = value;
        Self {
            id: course.id.into(),
            title: course.title,
            description: course.description,
            instructor: course.instructor,
            created_at: course.created_at,
            updated_at: course.updated_at,
            lessons: lessons.into_iter().map(LessonDto::from).collect(),
        }
    }
}

/// Paginated list response for `GET /courses`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    /// Courses on this page, in creation order.
    pub data: Vec<CourseDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Request body for `POST /courses/{id}/enroll`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    /// Name of the enrolling student.
    pub student: String,
}
