//! Builders for the HTTP state from the configured course store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::CourseService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCourseRepository;
use crate::outbound::persistence::DieselCourseRepository;

use super::ServerConfig;

/// Wire the course service over PostgreSQL when a pool is configured,
/// otherwise over an in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "course store selected");
            let repo = Arc::new(DieselCourseRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(CourseService::new(repo)))
        }
        None => {
            info!(store = "memory", "course store selected");
            let repo = Arc::new(InMemoryCourseRepository::new());
            HttpState::from_service(Arc::new(CourseService::new(repo)))
        }
    };
    web::Data::new(state)
}
