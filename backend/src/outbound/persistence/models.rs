//! Internal Diesel row structs for the `courses` table.
//!
//! These types never leave the persistence layer; conversion into domain
//! values happens in the repository.

use diesel::prelude::*;

use super::schema::courses;

/// Row struct for reading from the courses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: i64,
    pub name: String,
}

/// Insertable struct for creating course records. The id is assigned by the
/// `BIGSERIAL` sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub name: &'a str,
}

/// Changeset struct for renaming an existing course.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = courses)]
pub(crate) struct CourseUpdate<'a> {
    pub name: &'a str,
}
