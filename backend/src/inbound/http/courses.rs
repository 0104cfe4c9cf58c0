//! Course HTTP handlers.
//!
//! ```text
//! GET    /api/v1/courses/        List courses, optionally filtered by id/name
//! POST   /api/v1/courses/        Create a course
//! GET    /api/v1/courses/{id}/   Retrieve a course
//! PUT    /api/v1/courses/{id}/   Rename a course
//! DELETE /api/v1/courses/{id}/   Delete a course
//! ```
//!
//! Create and update accept either a JSON body or a form-encoded body carrying
//! `name`.

use actix_web::{Either, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Course;
use crate::domain::ports::{
    CreateCourseRequest, DeleteCourseRequest, GetCourseRequest, ListCoursesRequest,
    UpdateCourseRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_error_handler, query_error_handler};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{course_filter, course_id_from_path};

/// Course representation returned by every non-delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CourseResponseBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Test Course")]
    pub name: String,
}

impl From<Course> for CourseResponseBody {
    fn from(course: Course) -> Self {
        Self {
            id: course.id().get(),
            name: course.name().to_string(),
        }
    }
}

/// Request payload for creating or renaming a course.
///
/// `name` is optional at the wire level so a missing field is reported as a
/// field validation error rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CourseRequestBody {
    #[schema(example = "Test Course", max_length = 255)]
    pub name: Option<String>,
}

/// JSON or form-encoded course payload.
pub type CoursePayload = Either<web::Json<CourseRequestBody>, web::Form<CourseRequestBody>>;

fn payload_name(payload: CoursePayload) -> Option<String> {
    match payload {
        Either::Left(json) => json.into_inner().name,
        Either::Right(form) => form.into_inner().name,
    }
}

/// Query parameters accepted by the list endpoint. Unknown parameters are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Register the course endpoints and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use courses::inbound::http::courses::configure;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(list_courses)
        .service(create_course)
        .service(get_course)
        .service(update_course)
        .service(delete_course);
}

/// List courses matching the optional `id` and `name` filters.
#[utoipa::path(
    get,
    path = "/api/v1/courses/",
    params(
        ("id" = Option<i64>, Query, description = "Only return the course with this identifier"),
        ("name" = Option<String>, Query, description = "Only return courses with exactly this name")
    ),
    responses(
        (status = 200, description = "Matching courses in creation order", body = [CourseResponseBody]),
        (status = 400, description = "Invalid filter", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses/")]
pub async fn list_courses(
    state: web::Data<HttpState>,
    query: web::Query<CourseListQuery>,
) -> ApiResult<web::Json<Vec<CourseResponseBody>>> {
    let CourseListQuery { id, name } = query.into_inner();
    let filter = course_filter(id, name)?;

    let courses = state
        .courses_query
        .list_courses(ListCoursesRequest { filter })
        .await?;

    Ok(web::Json(
        courses.into_iter().map(CourseResponseBody::from).collect(),
    ))
}

/// Create a course with a server-assigned identifier.
#[utoipa::path(
    post,
    path = "/api/v1/courses/",
    request_body = CourseRequestBody,
    responses(
        (status = 201, description = "Course created", body = CourseResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses/")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: CoursePayload,
) -> ApiResult<HttpResponse> {
    let course = state
        .courses
        .create_course(CreateCourseRequest {
            name: payload_name(payload),
        })
        .await?;

    Ok(HttpResponse::Created().json(CourseResponseBody::from(course)))
}

/// Retrieve a single course.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/",
    params(("id" = i64, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course", body = CourseResponseBody),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}/")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CourseResponseBody>> {
    let id = course_id_from_path(&path)?;
    let course = state
        .courses_query
        .get_course(GetCourseRequest { id })
        .await?;
    Ok(web::Json(CourseResponseBody::from(course)))
}

/// Replace the name of an existing course.
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}/",
    params(("id" = i64, Path, description = "Course identifier")),
    request_body = CourseRequestBody,
    responses(
        (status = 200, description = "Course updated", body = CourseResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/{id}/")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: CoursePayload,
) -> ApiResult<web::Json<CourseResponseBody>> {
    let id = course_id_from_path(&path)?;
    let course = state
        .courses
        .update_course(UpdateCourseRequest {
            id,
            name: payload_name(payload),
        })
        .await?;
    Ok(web::Json(CourseResponseBody::from(course)))
}

/// Delete a course. Deleting the same course twice yields 404.
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}/",
    params(("id" = i64, Path, description = "Course identifier")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/{id}/")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = course_id_from_path(&path)?;
    state
        .courses
        .delete_course(DeleteCourseRequest { id })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "courses_tests.rs"]
mod tests;
