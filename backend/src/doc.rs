//! OpenAPI documentation for the course API.
//!
//! [`ApiDoc`] registers every course endpoint plus the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`] so domain types stay
//! free of utoipa derives. The document backs Swagger UI in debug builds and
//! is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::courses::{CourseRequestBody, CourseResponseBody};
use crate::inbound::http::schemas::{CourseSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        description = "Create, read, update, delete and filter courses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CourseRequestBody,
        CourseResponseBody,
        CourseSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "courses", description = "Course records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
