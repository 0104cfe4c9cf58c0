//! Driven adapters implementing the domain's course repository port.
//!
//! `memory` keeps courses in process and backs the default server
//! configuration. `persistence` stores them in PostgreSQL through Diesel.

pub mod memory;
pub mod persistence;
