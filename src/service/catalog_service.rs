//! Catalog service: orchestrates catalog operations and logs mutations.

use std::sync::Arc;

use crate::domain::recommend::recommend;
use crate::domain::{
    Catalog, Course, CoursePatch, CourseId, CourseWithLessons, Enrollment, Lesson, LessonId,
    LessonPatch, Recommendation,
};
use crate::error::NextCurlError;

/// Orchestration layer for all catalog operations.
///
/// Stateless coordinator over a shared [`Catalog`]: validates input,
/// delegates to the store, and logs every mutation.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    recommendation_limit: usize,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, recommendation_limit: usize) -> Self {
        Self {
            catalog,
            recommendation_limit,
        }
    }

    /// Returns a reference to the inner [`Catalog`].
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] for an invalid title or
    /// instructor.
    pub async fn create_course(
        &self,
        title: &str,
        description: &str,
        instructor: &str,
    ) -> Result<Course, NextCurlError> {
        let course = self
            .catalog
            .insert_course(Course::new(title, description, instructor)?)
            .await;
        tracing::info!(course_id = %course.id, title = %course.title, "course created");
        Ok(course)
    }

    /// Lists all courses in creation order.
    pub async fn list_courses(&self) -> Vec<Course> {
        self.catalog.courses().await
    }

    /// Returns a course with its ordered lessons.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist.
    pub async fn get_course(&self, id: CourseId) -> Result<CourseWithLessons, NextCurlError> {
        self.catalog.course(id).await
    }

    /// Partially updates a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] or
    /// [`NextCurlError::InvalidRequest`].
    pub async fn update_course(
        &self,
        id: CourseId,
        patch: CoursePatch,
    ) -> Result<Course, NextCurlError> {
        let course = self.catalog.update_course(id, patch).await?;
        tracing::info!(course_id = %id, "course updated");
        Ok(course)
    }

    /// Deletes a course and everything attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist.
    pub async fn delete_course(&self, id: CourseId) -> Result<(), NextCurlError> {
        self.catalog.remove_course(id).await?;
        tracing::info!(course_id = %id, "course deleted");
        Ok(())
    }

    /// Adds a lesson to a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] or
    /// [`NextCurlError::InvalidRequest`].
    pub async fn create_lesson(
        &self,
        course_id: CourseId,
        title: &str,
        content: &str,
        order: u32,
    ) -> Result<Lesson, NextCurlError> {
        let lesson = self
            .catalog
            .insert_lesson(Lesson::new(course_id, title, content, order)?)
            .await?;
        tracing::info!(lesson_id = %lesson.id, %course_id, order, "lesson created");
        Ok(lesson)
    }

    /// Lists lessons, optionally for one course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the filter names a
    /// missing course.
    pub async fn list_lessons(
        &self,
        course_id: Option<CourseId>,
    ) -> Result<Vec<Lesson>, NextCurlError> {
        self.catalog.lessons(course_id).await
    }

    /// Returns a single lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] if the lesson does not
    /// exist.
    pub async fn get_lesson(&self, id: LessonId) -> Result<Lesson, NextCurlError> {
        self.catalog.lesson(id).await
    }

    /// Partially updates a lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] or
    /// [`NextCurlError::InvalidRequest`].
    pub async fn update_lesson(
        &self,
        id: LessonId,
        patch: LessonPatch,
    ) -> Result<Lesson, NextCurlError> {
        let lesson = self.catalog.update_lesson(id, patch).await?;
        tracing::info!(lesson_id = %id, "lesson updated");
        Ok(lesson)
    }

    /// Deletes a lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] if the lesson does not
    /// exist.
    pub async fn delete_lesson(&self, id: LessonId) -> Result<(), NextCurlError> {
        self.catalog.remove_lesson(id).await?;
        tracing::info!(lesson_id = %id, "lesson deleted");
        Ok(())
    }

    /// Enrolls a student in a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`],
    /// [`NextCurlError::AlreadyEnrolled`] or
    /// [`NextCurlError::InvalidRequest`].
    pub async fn enroll(
        &self,
        course_id: CourseId,
        student: &str,
    ) -> Result<Enrollment, NextCurlError> {
        let enrollment = self.catalog.enroll(course_id, student).await?;
        tracing::info!(
            enrollment_id = %enrollment.id,
            %course_id,
            student = %enrollment.student,
            "student enrolled"
        );
        Ok(enrollment)
    }

    /// Lists enrollments, optionally for one student.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] for a blank student
    /// filter.
    pub async fn list_enrollments(
        &self,
        student: Option<&str>,
    ) -> Result<Vec<Enrollment>, NextCurlError> {
        self.catalog.enrollments(student).await
    }

    /// Recommends popular courses the student has not enrolled in.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] for a blank student name.
    pub async fn recommend(&self, student: &str) -> Result<Vec<Recommendation>, NextCurlError> {
        let candidates = self.catalog.candidates_for(student).await?;
        let candidate_count = candidates.len();
        let recommendations = recommend(candidates, self.recommendation_limit);
        tracing::debug!(
            student,
            candidates = candidate_count,
            returned = recommendations.len(),
            "computed recommendations"
        );
        Ok(recommendations)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(Catalog::new()), 3)
    }

    async fn seed(svc: &CatalogService, title: &str, students: &[&str]) -> Course {
        let Ok(course) = svc.create_course(title, "", "staff").await else {
            panic!("course creation failed");
        };
        for s in students {
            tokio_test::assert_ok!(svc.enroll(course.id, s).await);
        }
        course
    }

    #[tokio::test]
    async fn create_and_list_courses() {
        let svc = service();
        seed(&svc, "A", &[]).await;
        seed(&svc, "B", &[]).await;
        let titles: Vec<String> = svc.list_courses().await.into_iter().map(|c| c.title).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[tokio::test]
    async fn create_lesson_for_missing_course_fails() {
        let svc = service();
        let result = svc.create_lesson(CourseId::new(), "intro", "", 0).await;
        assert!(matches!(result, Err(NextCurlError::CourseNotFound(_))));
    }

    #[tokio::test]
    async fn recommend_skips_enrolled_and_unpopular() {
        let svc = service();
        seed(&svc, "popular", &["a", "b", "c", "d"]).await;
        seed(&svc, "also popular", &["a", "b", "c"]).await;
        seed(&svc, "niche", &[]).await;
        seed(&svc, "mine", &["me"]).await;

        let Ok(recs) = svc.recommend("me").await else {
            panic!("student is valid");
        };
        let titles: Vec<&str> = recs.iter().map(|r| r.course.title.as_str()).collect();
        assert_eq!(titles, ["popular", "also popular"]);
    }

    #[tokio::test]
    async fn recommend_with_no_candidates_is_empty() {
        let svc = service();
        seed(&svc, "only", &["me"]).await;
        let Ok(recs) = svc.recommend("me").await else {
            panic!("student is valid");
        };
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn recommend_rejects_blank_student() {
        let svc = service();
        assert!(matches!(
            svc.recommend("  ").await,
            Err(NextCurlError::InvalidRequest(_))
        ));
    }
}
