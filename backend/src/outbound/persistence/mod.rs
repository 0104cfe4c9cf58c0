//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the durable course store behind the `CourseRepository` port,
//! using `diesel-async` with `bb8` connection pooling. Diesel row structs
//! (`models.rs`) and the table definition (`schema.rs`) stay private to this
//! module.
//!
//! # Example
//!
//! ```no_run
//! use courses::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), courses::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/courses")).await?;
//! let repo = DieselCourseRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_course_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
