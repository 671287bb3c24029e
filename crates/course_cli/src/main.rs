//! Catalog scenario driver.
//!
//! # Responsibility
//! - Run the create/find/update/delete scenario against a disposable
//!   in-memory database and print each step.
//! - Optionally start file logging when given an absolute log directory.
//!
//! Usage: `course_cli [LOG_DIR]`

use course_core::db::{close_db, open_db_in_memory, Connection};
use course_core::{
    default_log_level, init_logging, parse_video_kind, video_for, Category, Course,
    CourseRepository, SqliteCourseRepository,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("course_core version={}", course_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("Error connecting to database: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("Database initialized and tables created.");

    let outcome = run_scenario(&conn);

    // Teardown runs whether or not the scenario succeeded.
    match close_db(conn) {
        Ok(()) => println!("\nDatabase connection closed."),
        Err(err) => eprintln!("Error closing connection: {err}"),
    }

    if let Err(err) = outcome {
        error!("event=scenario module=cli status=error error={err}");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    print_video_interest();
    ExitCode::SUCCESS
}

fn run_scenario(conn: &Connection) -> Result<(), Box<dyn Error>> {
    let repo = SqliteCourseRepository::try_new(conn)?;

    let category = Category::new("Web Development");
    println!("Created category: {category}");

    let mut course = Course::new(
        "Spring Boot Masterclass",
        category,
        "Master Spring Boot framework for enterprise applications",
    );
    println!("Created course: {course}");

    println!("\nSaving course to database using repository...");
    let id = repo.create(&mut course)?;
    println!("Course saved with id={id}");
    println!("  Name: {}", course.name());
    println!("  Category: {}", course.category());
    println!("  Description: {}", course.description());

    println!("\nRetrieving course from database...");
    let Some(mut retrieved) = repo.find_by_id(id)? else {
        println!("Course {id} not found.");
        return Ok(());
    };
    println!("Retrieved course: {retrieved}");

    println!("\nUpdating course...");
    retrieved.set_description("Master Spring Boot framework with advanced patterns");
    repo.update(&retrieved)?;
    if let Some(updated) = repo.find_by_id(id)? {
        println!("Updated course: {updated}");
    }

    println!("\nDeleting course...");
    repo.delete(id)?;
    println!("Course present after delete: {}", repo.find_by_id(id)?.is_some());

    Ok(())
}

fn print_video_interest() {
    println!();
    for tag in ["Movie", "TVShow", "Documentary"] {
        match parse_video_kind(tag) {
            Some(kind) => println!("{}", video_for(kind).calculate_interest()),
            None => println!("No interest calculation registered for `{tag}`."),
        }
    }
}
