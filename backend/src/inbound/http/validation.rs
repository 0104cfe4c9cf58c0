//! Request parsing helpers for the course HTTP adapter.
//!
//! Path and query values arrive as raw strings; these helpers turn them into
//! domain values and produce `invalid_request` errors with field context.

use serde_json::json;

use crate::domain::{CourseFilter, CourseId, Error};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_integer",
    }))
}

/// Treat an empty query value as if the parameter were absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Parse a course identifier supplied as a query parameter.
pub(crate) fn parse_course_id(value: &str, field: FieldName) -> Result<CourseId, Error> {
    value
        .parse::<CourseId>()
        .map_err(|_| invalid_integer_error(field, value))
}

/// Resolve a course identifier from a path segment.
///
/// A segment that is not an integer cannot name an existing course, so it
/// yields `not_found` rather than a validation error.
pub(crate) fn course_id_from_path(segment: &str) -> Result<CourseId, Error> {
    segment
        .parse::<CourseId>()
        .map_err(|_| Error::not_found(format!("course {segment} not found")))
}

/// Build a list filter from raw `id` and `name` query values.
pub(crate) fn course_filter(
    id: Option<String>,
    name: Option<String>,
) -> Result<CourseFilter, Error> {
    let mut filter = CourseFilter::default();
    if let Some(raw) = non_empty(id) {
        filter = filter.with_id(parse_course_id(&raw, FieldName::new("id"))?);
    }
    if let Some(name) = non_empty(name) {
        filter = filter.with_name(name);
    }
    Ok(filter)
}
