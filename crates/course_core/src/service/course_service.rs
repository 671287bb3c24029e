//! Course use-case service.
//!
//! # Responsibility
//! - Provide stable course entry points for callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::category::Category;
use crate::model::course::{Course, CourseId};
use crate::repo::course_repo::{CourseRepository, RepoError, RepoResult};

/// Use-case service wrapper for course operations.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists `course` (and its category when unpersisted).
    pub fn create_course(&self, course: &mut Course) -> RepoResult<CourseId> {
        self.repo.create(course)
    }

    /// Builds and persists a course under a new category in one call.
    pub fn create_course_in_new_category(
        &self,
        name: impl Into<String>,
        category_name: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<Course> {
        let mut course = Course::new(name, Category::new(category_name), description);
        self.repo.create(&mut course)?;
        Ok(course)
    }

    pub fn find_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        self.repo.find_by_id(id)
    }

    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_course(&self, course: &Course) -> RepoResult<()> {
        self.repo.update(course)
    }

    /// Replaces one course description and returns the reloaded record.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when `id` does not exist.
    pub fn change_description(
        &self,
        id: CourseId,
        description: impl Into<String>,
    ) -> RepoResult<Course> {
        let mut course = self.repo.find_by_id(id)?.ok_or(RepoError::NotFound(id))?;
        course.set_description(description);
        self.repo.update(&course)?;
        self.repo.find_by_id(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Deletes by id. Unknown ids are accepted silently.
    pub fn delete_course(&self, id: CourseId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
