//! Category value object.
//!
//! # Invariants
//! - `id == UNPERSISTED_ID` until a repository assigns the generated key.

use super::UNPERSISTED_ID;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage identifier for categories.
pub type CategoryId = i64;

/// Named grouping that every course belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Creates an unpersisted category.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNPERSISTED_ID, name)
    }

    /// Creates a category with a known storage id, e.g. when loading rows.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether a repository has already assigned a storage id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNPERSISTED_ID
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category{{id={}, name='{}'}}", self.id, self.name)
    }
}
