//! Enrollment of a student in a course.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validate::required_text;
use super::{CourseId, EnrollmentId};
use crate::error::NextCurlError;

/// Maximum student name length in characters.
pub const MAX_STUDENT_LEN: usize = 150;

/// A student's enrollment. At most one exists per `(course_id, student)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    /// Unique enrollment identifier.
    pub id: EnrollmentId,
    /// Course the student enrolled in.
    pub course_id: CourseId,
    /// Student name as supplied by the client.
    pub student: String,
    /// Enrollment timestamp.
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Creates a validated enrollment with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the student name is
    /// blank or too long.
    pub fn new(course_id: CourseId, student: &str) -> Result<Self, NextCurlError> {
        Ok(Self {
            id: EnrollmentId::new(),
            course_id,
            student: normalize_student(student)?,
            enrolled_at: Utc::now(),
        })
    }
}

/// Validates and trims a student name.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] if the name is blank or too
/// long.
pub fn normalize_student(student: &str) -> Result<String, NextCurlError> {
    required_text("student", student, MAX_STUDENT_LEN)
}
