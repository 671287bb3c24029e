use course_core::db::schema::{ensure_schema, CATALOG_TABLES};
use course_core::db::{close_db, open_db, open_db_in_memory};
use course_core::{Category, Course, CourseRepository, SqliteCourseRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_catalog_tables() {
    let conn = open_db_in_memory().unwrap();

    for table in CATALOG_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn open_db_in_memory_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();

    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let err = conn
        .execute(
            "INSERT INTO course (name, category_id, description) VALUES ('x', 999, '');",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn in_memory_databases_are_isolated() {
    let first = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::new(&first);
    let mut course = Course::new("Isolated", Category::new("Scratch"), "");
    repo.create(&mut course).unwrap();

    let second = open_db_in_memory().unwrap();
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM course;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn reopening_file_database_keeps_rows_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let conn_first = open_db(&path).unwrap();
    let mut course = Course::new("Persistent", Category::new("Files"), "survives reopen");
    SqliteCourseRepository::new(&conn_first)
        .create(&mut course)
        .unwrap();
    close_db(conn_first).unwrap();

    let conn_second = open_db(&path).unwrap();
    let loaded = SqliteCourseRepository::new(&conn_second)
        .find_by_id(course.id)
        .unwrap()
        .unwrap();
    assert_eq!(loaded, course);
}

#[test]
fn ensure_schema_is_idempotent_on_open_connection() {
    let conn = open_db_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    assert_table_exists(&conn, "course");
}

#[test]
fn close_db_releases_connection() {
    let conn = open_db_in_memory().unwrap();
    close_db(conn).unwrap();
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
