//! Course repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate course lifecycle operations into SQL over `course`/`category`.
//! - Write generated ids back onto the caller's records.
//!
//! # Invariants
//! - `create` persists an unpersisted category before the course row.
//! - `update` never creates categories.
//! - `delete` is a no-op for unknown ids and never cascades to `category`.
//! - Statements run without a surrounding transaction. A failed course insert
//!   after a successful category insert leaves that category row in place.

use crate::db::schema::CATALOG_TABLES;
use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::course::{Course, CourseId, CourseValidationError};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COURSE_SELECT_SQL: &str = "SELECT
    c.id AS id,
    c.name AS name,
    c.description AS description,
    cat.id AS cat_id,
    cat.name AS cat_name
FROM course c
JOIN category cat ON c.category_id = cat.id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for course persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CourseValidationError),
    Db(DbError),
    NotFound(CourseId),
    InvalidData(String),
    /// Connection was not bootstrapped through `db::open_db*`.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "course not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted course data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<CourseValidationError> for RepoError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for course CRUD operations.
pub trait CourseRepository {
    /// Inserts `course`, persisting its category first when needed.
    ///
    /// Generated ids are written back into `course` and `course.category`.
    fn create(&self, course: &mut Course) -> RepoResult<CourseId>;
    /// Inserts `category` and writes the generated id back into it.
    fn save_category(&self, category: &mut Category) -> RepoResult<CategoryId>;
    fn find_by_id(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Looks up a single category row. Returns `None` for unknown ids.
    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Overwrites name, category reference and description of an existing row.
    fn update(&self, course: &Course) -> RepoResult<()>;
    fn delete(&self, id: CourseId) -> RepoResult<()>;
}

/// SQLite-backed course repository borrowing a caller-owned connection.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Like `new`, but first checks that the catalog tables exist.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        for &table in CATALOG_TABLES {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
                );",
                [table],
                |row| row.get(0),
            )?;
            if !exists {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self::new(conn))
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn create(&self, course: &mut Course) -> RepoResult<CourseId> {
        course.validate()?;

        let created_category = if course.category.is_persisted() {
            None
        } else {
            Some(self.save_category(&mut course.category)?)
        };

        let inserted = self.conn.execute(
            "INSERT INTO course (name, category_id, description) VALUES (?1, ?2, ?3);",
            params![
                course.name.as_str(),
                course.category.id,
                course.description.as_str(),
            ],
        );
        if let Err(err) = inserted {
            if let Some(category_id) = created_category {
                warn!(
                    "event=course_create module=repo status=error orphaned_category_id={} error={}",
                    category_id, err
                );
            }
            return Err(err.into());
        }

        course.id = self.conn.last_insert_rowid();
        debug!(
            "event=course_create module=repo status=ok course_id={} category_id={}",
            course.id, course.category.id
        );
        Ok(course.id)
    }

    fn save_category(&self, category: &mut Category) -> RepoResult<CategoryId> {
        if category.name.trim().is_empty() {
            return Err(CourseValidationError::EmptyCategoryName.into());
        }

        self.conn.execute(
            "INSERT INTO category (name) VALUES (?1);",
            [category.name.as_str()],
        )?;

        category.id = self.conn.last_insert_rowid();
        debug!(
            "event=category_create module=repo status=ok category_id={}",
            category.id
        );
        Ok(category.id)
    }

    fn find_by_id(&self, id: CourseId) -> RepoResult<Option<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE c.id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }

        Ok(None)
    }

    fn find_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM category WHERE id = ?1;",
                [id],
                |row| Ok(Category::with_id(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(category)
    }

    fn update(&self, course: &Course) -> RepoResult<()> {
        course.validate()?;
        if !course.category.is_persisted() {
            return Err(CourseValidationError::UnpersistedCategory.into());
        }

        let changed = self.conn.execute(
            "UPDATE course
             SET
                name = ?1,
                category_id = ?2,
                description = ?3
             WHERE id = ?4;",
            params![
                course.name.as_str(),
                course.category.id,
                course.description.as_str(),
                course.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(course.id));
        }

        Ok(())
    }

    fn delete(&self, id: CourseId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM course WHERE id = ?1;", [id])?;
        debug!("event=course_delete module=repo status=ok course_id={id} changed={changed}");
        Ok(())
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let id: CourseId = row.get("id")?;
    // Nullable column; the write path never stores NULL.
    let description = row
        .get::<_, Option<String>>("description")?
        .unwrap_or_default();

    let category = Category::with_id(row.get("cat_id")?, row.get::<_, String>("cat_name")?);
    let course = Course::with_id(id, row.get::<_, String>("name")?, category, description);
    course
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("course id `{id}`: {err}")))?;
    Ok(course)
}
