//! Course aggregate and its partial-update patch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CourseId;
use super::validate::{optional_text, required_text};
use crate::error::NextCurlError;

/// Maximum course title length in characters.
pub const MAX_COURSE_TITLE_LEN: usize = 200;

/// Maximum instructor name length in characters.
pub const MAX_INSTRUCTOR_LEN: usize = 150;

/// A course offered on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Unique course identifier (immutable after creation).
    pub id: CourseId,
    /// Course title, 1 to [`MAX_COURSE_TITLE_LEN`] characters.
    pub title: String,
    /// Free-form description. May be empty.
    pub description: String,
    /// Display name of the instructor.
    pub instructor: String,
    /// Creation timestamp (immutable).
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Creates a validated course with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the title or instructor
    /// is blank or too long.
    pub fn new(
        title: &str,
        description: &str,
        instructor: &str,
    ) -> Result<Self, NextCurlError> {
        let title = required_text("title", title, MAX_COURSE_TITLE_LEN)?;
        let instructor = required_text("instructor", instructor, MAX_INSTRUCTOR_LEN)?;
        let now = Utc::now();
        Ok(Self {
            id: CourseId::new(),
            title,
            description: description.to_string(),
            instructor,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update, bumping `updated_at`.
    ///
    /// The patch is validated in full before any field changes, so a
    /// rejected patch leaves the course untouched.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if a provided field is
    /// invalid.
    pub fn apply(&mut self, patch: CoursePatch) -> Result<(), NextCurlError> {
        let title = optional_text("title", patch.title.as_deref(), MAX_COURSE_TITLE_LEN)?;
        let instructor =
            optional_text("instructor", patch.instructor.as_deref(), MAX_INSTRUCTOR_LEN)?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(instructor) = instructor {
            self.instructor = instructor;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Partial update for a [`Course`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New instructor.
    pub instructor: Option<String>,
}
