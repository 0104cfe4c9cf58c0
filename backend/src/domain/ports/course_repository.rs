//! Driven port for course persistence.
//!
//! The course service owns validation and not-found semantics; adapters only
//! store and retrieve rows. Absent records are reported as `None`/`false`
//! rather than errors so the service decides how to surface them.

use async_trait::async_trait;

use crate::domain::{Course, CourseFilter, CourseId, CourseName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Backing store could not be reached.
        Connection { message: String } =>
            "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "course repository query failed: {message}",
    }
}

/// Port for reading and writing course records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course, allocating a fresh identifier.
    async fn insert(&self, name: &CourseName) -> Result<Course, CourseRepositoryError>;

    /// Find a course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Replace the name of an existing course.
    ///
    /// Returns `None` when no course has this identifier.
    async fn update_name(
        &self,
        id: CourseId,
        name: &CourseName,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Remove a course. Returns `false` when no course has this identifier.
    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError>;

    /// List courses matching the filter in ascending identifier order.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_error_formats_message() {
        let err = CourseRepositoryError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "course repository connection failed: pool timed out"
        );
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = CourseRepositoryError::query("broken sql");
        assert_eq!(err.to_string(), "course repository query failed: broken sql");
    }

    #[rstest]
    fn constructors_accept_owned_and_borrowed_messages() {
        let owned = CourseRepositoryError::connection(String::from("refused"));
        let borrowed = CourseRepositoryError::connection("refused");
        assert_eq!(owned, borrowed);
        assert_eq!(
            owned,
            CourseRepositoryError::Connection {
                message: "refused".to_owned(),
            }
        );
    }

    #[rstest]
    fn variants_are_distinct() {
        assert_ne!(
            CourseRepositoryError::connection("x"),
            CourseRepositoryError::query("x")
        );
    }
}
