//! Data Transfer Objects for REST request/response serialization.
//!
//! Identifiers are exposed as plain UUID strings; domain newtypes stay
//! inside the crate.

pub mod common_dto;
pub mod course_dto;
pub mod enrollment_dto;
pub mod lesson_dto;

pub use common_dto::*;
pub use course_dto::*;
pub use enrollment_dto::*;
pub use lesson_dto::*;
