//! Driving port for course mutations.
//!
//! Inbound adapters call this port to create, rename, and delete courses
//! without depending on how courses are stored.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error};

/// Request to create a course. `name` is validated by the implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseRequest {
    pub name: Option<String>,
}

/// Request to replace the name of an existing course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCourseRequest {
    pub id: CourseId,
    pub name: Option<String>,
}

/// Request to delete a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCourseRequest {
    pub id: CourseId,
}

/// Driving port for course mutations.
///
/// Implementations fail with [`crate::domain::ErrorCode::InvalidRequest`] when
/// the name is missing or blank and with [`crate::domain::ErrorCode::NotFound`]
/// when the identifier does not resolve.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCommand: Send + Sync {
    /// Create a course and return it with its allocated identifier.
    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course, Error>;

    /// Rename a course, keeping its identifier.
    async fn update_course(&self, request: UpdateCourseRequest) -> Result<Course, Error>;

    /// Delete a course. Deleting the same identifier twice fails the second time.
    async fn delete_course(&self, request: DeleteCourseRequest) -> Result<(), Error>;
}
