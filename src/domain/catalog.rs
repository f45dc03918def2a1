//! In-memory course catalog.
//!
//! [`Catalog`] keeps courses, lessons and enrollments behind a single
//! [`tokio::sync::RwLock`]. A single lock keeps cross-entity rules atomic:
//! enrollment uniqueness, course existence checks and cascading deletes
//! never observe a half-applied change.
//!
//! Entities are stored in creation order so list results are stable.

use tokio::sync::RwLock;

use super::course::{Course, CoursePatch};
use super::enrollment::{Enrollment, normalize_student};
use super::lesson::{Lesson, LessonPatch, sort_by_order};
use super::{CourseId, LessonId};
use crate::error::NextCurlError;

#[derive(Debug, Default)]
struct CatalogState {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
    enrollments: Vec<Enrollment>,
}

impl CatalogState {
    fn course(&self, id: CourseId) -> Result<&Course, NextCurlError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(NextCurlError::CourseNotFound(*id.as_uuid()))
    }

    fn course_mut(&mut self, id: CourseId) -> Result<&mut Course, NextCurlError> {
        self.courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(NextCurlError::CourseNotFound(*id.as_uuid()))
    }

    fn lesson_mut(&mut self, id: LessonId) -> Result<&mut Lesson, NextCurlError> {
        self.lessons
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(NextCurlError::LessonNotFound(*id.as_uuid()))
    }

    fn lessons_of(&self, course_id: CourseId) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        sort_by_order(&mut lessons);
        lessons
    }

    fn enrollment_count(&self, course_id: CourseId) -> u64 {
        self.enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .count() as u64
    }
}

/// A course together with its ordered lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithLessons {
    /// The course.
    pub course: Course,
    /// Lessons in ascending `order`.
    pub lessons: Vec<Lesson>,
}

/// Central store for the course catalog.
///
/// # Concurrency
///
/// Reads proceed concurrently; writes are serialized. Every method takes
/// the lock once, so each operation is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a course.
    pub async fn insert_course(&self, course: Course) -> Course {
        let mut state = self.state.write().await;
        state.courses.push(course.clone());
        course
    }

    /// Returns all courses in creation order.
    pub async fn courses(&self) -> Vec<Course> {
        self.state.read().await.courses.clone()
    }

    /// Returns a course with its lessons.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist.
    pub async fn course(&self, id: CourseId) -> Result<CourseWithLessons, NextCurlError> {
        let state = self.state.read().await;
        let course = state.course(id)?.clone();
        let lessons = state.lessons_of(id);
        Ok(CourseWithLessons { course, lessons })
    }

    /// Applies a partial update to a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist, or [`NextCurlError::InvalidRequest`] for an invalid patch.
    pub async fn update_course(
        &self,
        id: CourseId,
        patch: CoursePatch,
    ) -> Result<Course, NextCurlError> {
        let mut state = self.state.write().await;
        let course = state.course_mut(id)?;
        course.apply(patch)?;
        Ok(course.clone())
    }

    /// Removes a course along with its lessons and enrollments.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist.
    pub async fn remove_course(&self, id: CourseId) -> Result<Course, NextCurlError> {
        let mut state = self.state.write().await;
        let pos = state
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(NextCurlError::CourseNotFound(*id.as_uuid()))?;
        let course = state.courses.remove(pos);
        state.lessons.retain(|l| l.course_id != id);
        state.enrollments.retain(|e| e.course_id != id);
        Ok(course)
    }

    /// Inserts a lesson into an existing course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the owning course does
    /// not exist.
    pub async fn insert_lesson(&self, lesson: Lesson) -> Result<Lesson, NextCurlError> {
        let mut state = self.state.write().await;
        state.course(lesson.course_id)?;
        state.lessons.push(lesson.clone());
        Ok(lesson)
    }

    /// Returns lessons, optionally restricted to one course.
    ///
    /// A course filter yields that course's lessons in ascending `order`;
    /// without a filter lessons are grouped by course creation order.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if a filter names a
    /// missing course.
    pub async fn lessons(&self, course_id: Option<CourseId>) -> Result<Vec<Lesson>, NextCurlError> {
        let state = self.state.read().await;
        match course_id {
            Some(id) => {
                state.course(id)?;
                Ok(state.lessons_of(id))
            }
            None => Ok(state
                .courses
                .iter()
                .flat_map(|c| state.lessons_of(c.id))
                .collect()),
        }
    }

    /// Returns a single lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] if the lesson does not
    /// exist.
    pub async fn lesson(&self, id: LessonId) -> Result<Lesson, NextCurlError> {
        self.state
            .read()
            .await
            .lessons
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(NextCurlError::LessonNotFound(*id.as_uuid()))
    }

    /// Applies a partial update to a lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] if the lesson does not
    /// exist, or [`NextCurlError::InvalidRequest`] for an invalid patch.
    pub async fn update_lesson(
        &self,
        id: LessonId,
        patch: LessonPatch,
    ) -> Result<Lesson, NextCurlError> {
        let mut state = self.state.write().await;
        let lesson = state.lesson_mut(id)?;
        lesson.apply(patch)?;
        Ok(lesson.clone())
    }

    /// Removes a lesson.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::LessonNotFound`] if the lesson does not
    /// exist.
    pub async fn remove_lesson(&self, id: LessonId) -> Result<Lesson, NextCurlError> {
        let mut state = self.state.write().await;
        let pos = state
            .lessons
            .iter()
            .position(|l| l.id == id)
            .ok_or(NextCurlError::LessonNotFound(*id.as_uuid()))?;
        Ok(state.lessons.remove(pos))
    }

    /// Enrolls `student` in a course.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::CourseNotFound`] if the course does not
    /// exist, [`NextCurlError::AlreadyEnrolled`] if the student is already
    /// enrolled, or [`NextCurlError::InvalidRequest`] for a blank name.
    pub async fn enroll(
        &self,
        course_id: CourseId,
        student: &str,
    ) -> Result<Enrollment, NextCurlError> {
        let enrollment = Enrollment::new(course_id, student)?;
        let mut state = self.state.write().await;
        state.course(course_id)?;
        if state
            .enrollments
            .iter()
            .any(|e| e.course_id == course_id && e.student == enrollment.student)
        {
            return Err(NextCurlError::AlreadyEnrolled);
        }
        state.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    /// Returns enrollments in creation order, optionally for one student.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the student filter is
    /// blank.
    pub async fn enrollments(&self, student: Option<&str>) -> Result<Vec<Enrollment>, NextCurlError> {
        let student = student.map(normalize_student).transpose()?;
        let state = self.state.read().await;
        Ok(state
            .enrollments
            .iter()
            .filter(|e| student.as_deref().is_none_or(|s| e.student == s))
            .cloned()
            .collect())
    }

    /// Returns every course `student` is not enrolled in, paired with its
    /// total enrollment count.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the student name is
    /// blank.
    pub async fn candidates_for(&self, student: &str) -> Result<Vec<(Course, u64)>, NextCurlError> {
        let student = normalize_student(student)?;
        let state = self.state.read().await;
        Ok(state
            .courses
            .iter()
            .filter(|c| {
                !state
                    .enrollments
                    .iter()
                    .any(|e| e.course_id == c.id && e.student == student)
            })
            .map(|c| (c.clone(), state.enrollment_count(c.id)))
            .collect())
    }

    /// Returns the number of courses.
    pub async fn len(&self) -> usize {
        self.state.read().await.courses.len()
    }

    /// Returns `true` if the catalog holds no courses.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.courses.is_empty()
    }
}
