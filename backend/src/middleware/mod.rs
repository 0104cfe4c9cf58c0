//! Request middleware.
//!
//! Purpose: wrap every request with a trace identifier and a completion log
//! line.

pub mod trace;

pub use trace::Trace;
