//! Use-case services over repository contracts.
//!
//! # Responsibility
//! - Expose catalog use-cases without leaking storage details.
//!
//! # Invariants
//! - Services depend on repository traits, never on SQLite directly.

pub mod course_service;
