//! HTTP inbound adapter exposing the course REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;
