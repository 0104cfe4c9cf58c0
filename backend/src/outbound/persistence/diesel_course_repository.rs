//! PostgreSQL-backed `CourseRepository` implementation using Diesel ORM.
//!
//! Identifiers come from the `courses.id` `BIGSERIAL` sequence, so they are
//! never reused after deletion. Rows whose stored name no longer satisfies the
//! domain rules surface as query errors rather than being silently repaired.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseFilter, CourseId, CourseName};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CourseRow, CourseUpdate, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseRepositoryError {
    map_basic_pool_error(error, CourseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CourseRepositoryError {
    map_basic_diesel_error(
        error,
        CourseRepositoryError::query,
        CourseRepositoryError::connection,
    )
}

/// Convert a database row to a domain course.
fn row_to_course(row: CourseRow) -> Result<Course, CourseRepositoryError> {
    let id = row.id;
    let name = CourseName::new(row.name).map_err(|err| {
        warn!(course_id = id, error = %err, "stored course name is invalid");
        CourseRepositoryError::query(format!("stored course {id} has an invalid name: {err}"))
    })?;
    Ok(Course::new(CourseId::new(id), name))
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn insert(&self, name: &CourseName) -> Result<Course, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(courses::table)
            .values(NewCourseRow {
                name: name.as_ref(),
            })
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_course(row)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = courses::table
            .find(id.get())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_course).transpose()
    }

    async fn update_name(
        &self,
        id: CourseId,
        name: &CourseName,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(courses::table.find(id.get()))
            .set(&CourseUpdate {
                name: name.as_ref(),
            })
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_course).transpose()
    }

    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(courses::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = courses::table
            .select(CourseRow::as_select())
            .order(courses::id.asc())
            .into_boxed();
        if let Some(id) = filter.id() {
            query = query.filter(courses::id.eq(id.get()));
        }
        if let Some(name) = filter.name() {
            query = query.filter(courses::name.eq(name.to_owned()));
        }
        let rows: Vec<CourseRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_course).collect()
    }
}
