//! Lesson DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Lesson, LessonPatch};

/// Request body for `POST /lessons`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLessonRequest {
    /// Owning course.
    pub course_id: uuid::Uuid,
    /// Lesson title (1–255 chars).
    pub title: String,
    /// Lesson body.
    #[serde(default)]
    pub content: String,
    /// Position within the course. Defaults to 0.
    #[serde(default)]
    pub order: u32,
}

/// Request body for `PATCH /lessons/{id}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLessonRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New content.
    #[serde(default)]
    pub content: Option<String>,
    /// New position.
    #[serde(default)]
    pub order: Option<u32>,
}

impl From<UpdateLessonRequest> for LessonPatch {
    fn from(req: UpdateLessonRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            order: req.order,
        }
    }
}

/// Lesson representation in responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonDto {
    /// Lesson identifier.
    pub id: uuid::Uuid,
    /// Owning course.
    pub course_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Position within the course.
    pub order: u32,
}

impl From<Lesson> for LessonDto {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id.into(),
            course_id: lesson.course_id.into(),
            title: lesson.title,
            content: lesson.content,
            order: lesson.order,
        }
    }
}

/// Query parameters for `GET /lessons`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonListParams {
    /// Restrict to one course's lessons.
    pub course_id: Option<uuid::Uuid>,
}
