//! Course domain service.
//!
//! Implements the course driving ports on top of a [`CourseRepository`]:
//! validates names before touching storage, turns absent records into
//! not-found errors, and maps adapter failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CourseCommand, CourseQuery, CourseRepository, CourseRepositoryError, CreateCourseRequest,
    DeleteCourseRequest, GetCourseRequest, ListCoursesRequest, UpdateCourseRequest,
};
use crate::domain::{Course, CourseId, CourseName, CourseValidationError, Error};

fn map_repository_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            Error::internal(format!("course repository error: {message}"))
        }
    }
}

fn map_validation_error(error: CourseValidationError) -> Error {
    let code = match error {
        CourseValidationError::MissingName => "missing_field",
        CourseValidationError::EmptyName => "empty_field",
        CourseValidationError::NameTooLong { .. } => "too_long",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": "name",
        "code": code,
    }))
}

fn course_not_found(id: CourseId) -> Error {
    Error::not_found(format!("course {id} not found"))
}

/// Course service implementing [`CourseCommand`] and [`CourseQuery`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use courses::domain::CourseService;
/// use courses::domain::ports::{CourseCommand, CourseQuery, CreateCourseRequest, GetCourseRequest};
/// use courses::outbound::memory::InMemoryCourseRepository;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let service = CourseService::new(Arc::new(InMemoryCourseRepository::new()));
/// let created = service
///     .create_course(CreateCourseRequest { name: Some("Geology".to_owned()) })
///     .await
///     .expect("create succeeds");
/// let fetched = service
///     .get_course(GetCourseRequest { id: created.id() })
///     .await
///     .expect("get succeeds");
/// assert_eq!(fetched, created);
/// # });
/// ```
#[derive(Clone)]
pub struct CourseService<R> {
    course_repo: Arc<R>,
}

impl<R> CourseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(course_repo: Arc<R>) -> Self {
        Self { course_repo }
    }
}

#[async_trait]
impl<R> CourseCommand for CourseService<R>
where
    R: CourseRepository,
{
    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course, Error> {
        let name = CourseName::from_optional(request.name).map_err(map_validation_error)?;

        let course = self
            .course_repo
            .insert(&name)
            .await
            .map_err(map_repository_error)?;

        info!(course_id = %course.id(), "course created");
        Ok(course)
    }

    async fn update_course(&self, request: UpdateCourseRequest) -> Result<Course, Error> {
        // A missing course is reported before the payload is validated.
        self.course_repo
            .find_by_id(request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| course_not_found(request.id))?;

        let name = CourseName::from_optional(request.name).map_err(map_validation_error)?;

        let course = self
            .course_repo
            .update_name(request.id, &name)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| course_not_found(request.id))?;

        info!(course_id = %course.id(), "course renamed");
        Ok(course)
    }

    async fn delete_course(&self, request: DeleteCourseRequest) -> Result<(), Error> {
        let removed = self
            .course_repo
            .delete(request.id)
            .await
            .map_err(map_repository_error)?;

        if !removed {
            return Err(course_not_found(request.id));
        }

        info!(course_id = %request.id, "course deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> CourseQuery for CourseService<R>
where
    R: CourseRepository,
{
    async fn get_course(&self, request: GetCourseRequest) -> Result<Course, Error> {
        debug!(course_id = %request.id, "fetching course");
        self.course_repo
            .find_by_id(request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| course_not_found(request.id))
    }

    async fn list_courses(&self, request: ListCoursesRequest) -> Result<Vec<Course>, Error> {
        let courses = self
            .course_repo
            .list(&request.filter)
            .await
            .map_err(map_repository_error)?;

        debug!(
            filter = ?request.filter,
            count = courses.len(),
            "listed courses"
        );
        Ok(courses)
    }
}

#[cfg(test)]
#[path = "course_service_tests.rs"]
mod tests;
