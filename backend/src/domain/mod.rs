//! Domain primitives, ports, and services.
//!
//! Purpose: define the course entity and the operations performed on it
//! independently of HTTP or storage concerns. Inbound adapters call the
//! driving ports in [`ports`]; outbound adapters implement the driven ports.
//!
//! Public surface:
//! - `Course`, `CourseId`, `CourseName`, `CourseFilter` - entity and filter.
//! - `CourseService` - course store semantics over a repository.
//! - `Error`, `ErrorCode` - transport-agnostic failures.
//! - `TraceId` - request-scoped correlation identifier.

mod course;
mod course_service;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::course::{
    COURSE_NAME_MAX, Course, CourseFilter, CourseId, CourseName, CourseValidationError,
};
pub use self::course_service::CourseService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
