//! Driving port for course reads.

use async_trait::async_trait;

use crate::domain::{Course, CourseFilter, CourseId, Error};

/// Request to fetch one course by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCourseRequest {
    pub id: CourseId,
}

/// Request to list courses matching a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCoursesRequest {
    pub filter: CourseFilter,
}

/// Driving port for course reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// Fetch one course, failing with not found when it does not exist.
    async fn get_course(&self, request: GetCourseRequest) -> Result<Course, Error>;

    /// List courses matching the filter in insertion order. Never fails for
    /// an empty result.
    async fn list_courses(&self, request: ListCoursesRequest) -> Result<Vec<Course>, Error>;
}
