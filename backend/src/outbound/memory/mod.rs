//! In-process course repository.
//!
//! Keeps courses in an ordered map behind a read/write lock. Identifiers come
//! from a monotonic counter so a deleted identifier is never handed out again,
//! and map order equals insertion order.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseFilter, CourseId, CourseName};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<CourseId, Course>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Lock-protected in-memory implementation of [`CourseRepository`].
///
/// Each instance owns an independent table, so tests can run in parallel
/// against separate repositories.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    table: RwLock<Table>,
}

impl InMemoryCourseRepository {
    /// Create an empty repository whose first identifier is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn map_poison<T>(_: PoisonError<T>) -> CourseRepositoryError {
    error!("in-memory course table lock poisoned");
    CourseRepositoryError::query("course table lock poisoned")
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert(&self, name: &CourseName) -> Result<Course, CourseRepositoryError> {
        let mut table = self.table.write().map_err(map_poison)?;
        let id = CourseId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| CourseRepositoryError::query("course identifier space exhausted"))?;
        let course = Course::new(id, name.clone());
        table.rows.insert(id, course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let table = self.table.read().map_err(map_poison)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update_name(
        &self,
        id: CourseId,
        name: &CourseName,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut table = self.table.write().map_err(map_poison)?;
        let Some(existing) = table.rows.remove(&id) else {
            return Ok(None);
        };
        let updated = existing.renamed(name.clone());
        table.rows.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError> {
        let mut table = self.table.write().map_err(map_poison)?;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseRepositoryError> {
        let table = self.table.read().map_err(map_poison)?;
        if let Some(id) = filter.id() {
            return Ok(table
                .rows
                .get(&id)
                .filter(|course| filter.matches(course))
                .cloned()
                .into_iter()
                .collect());
        }
        Ok(table
            .rows
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect())
    }
}
