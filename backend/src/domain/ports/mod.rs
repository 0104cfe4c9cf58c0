//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_command;
mod course_query;
mod course_repository;

#[cfg(test)]
pub use course_command::MockCourseCommand;
pub use course_command::{
    CourseCommand, CreateCourseRequest, DeleteCourseRequest, UpdateCourseRequest,
};
#[cfg(test)]
pub use course_query::MockCourseQuery;
pub use course_query::{CourseQuery, GetCourseRequest, ListCoursesRequest};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
