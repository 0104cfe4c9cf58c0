//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the course driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CourseCommand, CourseQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub courses: Arc<dyn CourseCommand>,
    pub courses_query: Arc<dyn CourseQuery>,
}

impl HttpState {
    /// Construct state from separate command and query ports.
    pub fn new(courses: Arc<dyn CourseCommand>, courses_query: Arc<dyn CourseQuery>) -> Self {
        Self {
            courses,
            courses_query,
        }
    }

    /// Construct state from a single service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use courses::domain::CourseService;
    /// use courses::inbound::http::state::HttpState;
    /// use courses::outbound::memory::InMemoryCourseRepository;
    ///
    /// let service = CourseService::new(Arc::new(InMemoryCourseRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.courses_query.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CourseCommand + CourseQuery + 'static,
    {
        Self {
            courses: service.clone(),
            courses_query: service,
        }
    }
}
