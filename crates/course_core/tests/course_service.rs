use course_core::db::open_db_in_memory;
use course_core::{CourseService, RepoError, SqliteCourseRepository};

#[test]
fn service_runs_catalog_scenario() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseRepository::try_new(&conn).unwrap());

    let course = service
        .create_course_in_new_category(
            "Spring Boot Masterclass",
            "Web Development",
            "Master Spring Boot framework for enterprise applications",
        )
        .unwrap();
    assert_ne!(course.id, 0);
    assert_ne!(course.category.id, 0);

    let found = service.find_course(course.id).unwrap().unwrap();
    assert_eq!(found.name, "Spring Boot Masterclass");
    assert_eq!(found.category.name, "Web Development");
    assert_eq!(
        found.description,
        "Master Spring Boot framework for enterprise applications"
    );

    let updated = service
        .change_description(course.id, "Master Spring Boot framework with advanced patterns")
        .unwrap();
    assert_eq!(updated.id, course.id);
    assert_eq!(
        updated.description,
        "Master Spring Boot framework with advanced patterns"
    );

    service.delete_course(course.id).unwrap();
    assert!(service.find_course(course.id).unwrap().is_none());
}

#[test]
fn change_description_of_missing_course_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseRepository::new(&conn));

    let err = service.change_description(8, "nothing").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(8)));
}
