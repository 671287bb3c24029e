//! SQLite storage bootstrap for the course catalog.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Ensure catalog tables exist before any repository touches them.
//! - Close connections explicitly for scoped teardown.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and the catalog schema.
//! - Connections are passed to repositories explicitly; there is no global one.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{close_db, open_db, open_db_in_memory};
pub use rusqlite::Connection;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
