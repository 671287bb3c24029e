//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for courses and categories.
//! - Isolate SQLite query details from the model and service layers.
//!
//! # Invariants
//! - Write paths call `Course::validate()` before SQL mutations.
//! - Repository APIs return semantic errors (`NotFound`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod course_repo;
