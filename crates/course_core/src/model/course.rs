//! Course entity.
//!
//! # Responsibility
//! - Represent course data only. Persistence lives in `repo::course_repo`.
//! - Provide write-time validation used by repositories.
//!
//! # Invariants
//! - A course references exactly one category.
//! - Once persisted, `id` is nonzero and stable.
//! - `description` fits the storage column limit (`MAX_DESCRIPTION_CHARS`).

use super::category::Category;
use super::UNPERSISTED_ID;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage identifier for courses.
pub type CourseId = i64;

/// Upper bound for `Course::description`, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Validation failures detected before any SQL is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    EmptyCourseName,
    EmptyCategoryName,
    DescriptionTooLong { len: usize, max: usize },
    /// Update paths never create categories on the caller's behalf.
    UnpersistedCategory,
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCourseName => write!(f, "course name cannot be empty"),
            Self::EmptyCategoryName => write!(f, "category name cannot be empty"),
            Self::DescriptionTooLong { len, max } => {
                write!(f, "course description has {len} chars; max is {max}")
            }
            Self::UnpersistedCategory => {
                write!(f, "course category must be persisted before update")
            }
        }
    }
}

impl Error for CourseValidationError {}

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Owned copy; the repository writes the generated category id back here.
    pub category: Category,
    pub description: String,
}

impl Course {
    /// Creates an unpersisted course.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self::with_id(UNPERSISTED_ID, name, category, description)
    }

    /// Creates a course with a known storage id.
    pub fn with_id(
        id: CourseId,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            description: description.into(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNPERSISTED_ID
    }

    /// Checks field-level invariants shared by insert and update paths.
    ///
    /// The category name is only checked while the category is unpersisted.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        if self.name.trim().is_empty() {
            return Err(CourseValidationError::EmptyCourseName);
        }
        // A persisted category is referenced by id only; its name is not written.
        if !self.category.is_persisted() && self.category.name.trim().is_empty() {
            return Err(CourseValidationError::EmptyCategoryName);
        }
        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            return Err(CourseValidationError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION_CHARS,
            });
        }
        Ok(())
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Course{{id={}, name='{}', category={}, description='{}'}}",
            self.id, self.name, self.category, self.description
        )
    }
}
