//! Catalog schema bootstrap.
//!
//! # Invariants
//! - Every statement is `CREATE ... IF NOT EXISTS`; running it twice is a no-op.
//! - `course.category_id` references `category.id`.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables created by `ensure_schema`, in dependency order.
pub const CATALOG_TABLES: &[&str] = &["category", "course"];

/// Creates catalog tables that do not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
