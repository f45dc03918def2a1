//! Enrollment and recommendation DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::course_dto::CourseDto;
use crate::domain::{Enrollment, Recommendation};

/// Enrollment representation in responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrollmentDto {
    /// Enrollment identifier.
    pub id: uuid::Uuid,
    /// Course the student enrolled in.
    pub course_id: uuid::Uuid,
    /// Student name.
    pub student: String,
    /// Enrollment timestamp.
    pub enrolled_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(e: Enrollment) -> Self {
        Self {
            id: e.id.into(),
            course_id: e.course_id.into(),
            student: e.student,
            enrolled_at: e.enrolled_at,
        }
    }
}

/// Query parameters for `GET /enrollments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnrollmentListParams {
    /// Restrict to one student's enrollments.
    pub student: Option<String>,
}

/// One recommended course.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationDto {
    /// The course.
    pub course: CourseDto,
    /// Number of students enrolled in the course.
    pub enrollment_count: u64,
}

impl From<Recommendation> for RecommendationDto {
    fn from(r: Recommendation) -> Self {
        Self {
            course: r.course.into(),
            enrollment_count: r.enrollment_count,
        }
    }
}

/// Response body for `GET /students/{student}/recommendations`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationResponse {
    /// Student the recommendations were computed for.
    pub student: String,
    /// Recommended courses, most popular first.
    pub recommendations: Vec<RecommendationDto>,
}
