//! Lesson entity belonging to a course.

use serde::Serialize;

use super::validate::{optional_text, required_text};
use super::{CourseId, LessonId};
use crate::error::NextCurlError;

/// Maximum lesson title length in characters.
pub const MAX_LESSON_TITLE_LEN: usize = 255;

/// A single lesson. Lessons of a course are presented in ascending
/// `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: LessonId,
    /// Owning course.
    pub course_id: CourseId,
    /// Lesson title, 1 to [`MAX_LESSON_TITLE_LEN`] characters.
    pub title: String,
    /// Lesson body.
    pub content: String,
    /// Position within the course. Defaults to 0.
    pub order: u32,
}

impl Lesson {
    /// Creates a validated lesson with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the title is blank or
    /// too long.
    pub fn new(
        course_id: CourseId,
        title: &str,
        content: &str,
        order: u32,
    ) -> Result<Self, NextCurlError> {
        Ok(Self {
            id: LessonId::new(),
            course_id,
            title: required_text("title", title, MAX_LESSON_TITLE_LEN)?,
            content: content.to_string(),
            order,
        })
    }

    /// Applies a partial update. Validated in full before any field
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`NextCurlError::InvalidRequest`] if the new title is
    /// invalid.
    pub fn apply(&mut self, patch: LessonPatch) -> Result<(), NextCurlError> {
        if let Some(title) = optional_text("title", patch.title.as_deref(), MAX_LESSON_TITLE_LEN)? {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        Ok(())
    }
}

/// Partial update for a [`Lesson`].
#[derive(Debug, Clone, Default)]
pub struct LessonPatch {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New position.
    pub order: Option<u32>,
}

/// Sorts lessons by ascending `order`. The sort is stable, so lessons
/// sharing an `order` keep their creation sequence.
pub fn sort_by_order(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|l| l.order);
}
