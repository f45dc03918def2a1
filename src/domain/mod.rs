//! Domain layer: identifiers, catalog entities, the in-memory catalog and
//! recommendation ranking.

pub mod catalog;
pub mod course;
pub mod enrollment;
pub mod ids;
pub mod lesson;
pub mod recommend;
pub mod validate;

pub use catalog::{Catalog, CourseWithLessons};
pub use course::{Course, CoursePatch};
pub use enrollment::Enrollment;
pub use ids::{ConnectionId, CourseId, EnrollmentId, LessonId};
pub use lesson::{Lesson, LessonPatch};
pub use recommend::Recommendation;
