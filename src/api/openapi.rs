//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    CourseDetailDto, CourseDto, CourseListResponse, CreateCourseRequest, CreateLessonRequest,
    EnrollRequest, EnrollmentDto, LessonDto, PaginationMeta, RecommendationDto,
    RecommendationResponse, UpdateCourseRequest, UpdateLessonRequest,
};
use super::handlers::{course, enrollment, lesson, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "next-curl",
        description = "Course catalog API and realtime echo server for the Next-curl educational platform."
    ),
    paths(
        course::create_course,
        course::list_courses,
        course::get_course,
        course::update_course,
        course::delete_course,
        course::enroll,
        lesson::create_lesson,
        lesson::list_lessons,
        lesson::get_lesson,
        lesson::update_lesson,
        lesson::delete_lesson,
        enrollment::list_enrollments,
        enrollment::recommendations,
        system::health_handler,
    ),
    components(schemas(
        CourseDto,
        CourseDetailDto,
        CourseListResponse,
        CreateCourseRequest,
        UpdateCourseRequest,
        EnrollRequest,
        LessonDto,
        CreateLessonRequest,
        UpdateLessonRequest,
        EnrollmentDto,
        RecommendationDto,
        RecommendationResponse,
        PaginationMeta,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Courses", description = "Course management and enrollment"),
        (name = "Lessons", description = "Lesson management"),
        (name = "Enrollments", description = "Enrollment listing and recommendations"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/courses",
            "/api/v1/courses/{id}",
            "/api/v1/courses/{id}/enroll",
            "/api/v1/lessons",
            "/api/v1/lessons/{id}",
            "/api/v1/enrollments",
            "/api/v1/students/{student}/recommendations",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
