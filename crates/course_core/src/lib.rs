//! Core persistence logic for the course catalog.
//! Entities hold data; repositories own every SQL statement.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{close_db, open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::course::{Course, CourseId, CourseValidationError, MAX_DESCRIPTION_CHARS};
pub use model::video::{parse_video_kind, video_for, Movie, TvShow, Video, VideoKind};
pub use model::UNPERSISTED_ID;
pub use repo::course_repo::{CourseRepository, RepoError, RepoResult, SqliteCourseRepository};
pub use service::course_service::CourseService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
