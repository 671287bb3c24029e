//! Course catalog domain model.
//!
//! # Responsibility
//! - Define plain data records for courses and their categories.
//! - Keep persistence concerns out of the model; see `repo`.
//!
//! # Invariants
//! - Identifier `0` means "not yet persisted" for every record.
//! - A persisted identifier is stable and never reassigned.

pub mod category;
pub mod course;
pub mod video;

/// Sentinel identifier for records that have not been written to storage.
pub const UNPERSISTED_ID: i64 = 0;
