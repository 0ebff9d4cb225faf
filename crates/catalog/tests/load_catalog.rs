//! Integration tests for loading catalog files from disk.

use catalog::{CatalogError, CourseCatalog, CourseId, Grade};
use std::fs;
use std::path::{Path, PathBuf};

fn sample_catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/courses.json")
}

/// Write `content` to a file unique to this test
fn write_temp_catalog(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "catalog-test-{}-{}.json",
        std::process::id(),
        name
    ));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_bundled_catalog() {
    let catalog = CourseCatalog::load_from_file(&sample_catalog_path()).unwrap();

    assert!(!catalog.is_empty());
    catalog.validate().unwrap();

    let mandatory = catalog.mandatory_course().unwrap();
    assert_eq!(mandatory.id, Some(CourseId::Text("core-study-skills".to_string())));
    assert_eq!(mandatory.grade, Grade::Number(10));
}

#[test]
fn test_load_preserves_file_order() {
    let path = write_temp_catalog(
        "order",
        r#"[
            {"id": 3, "grade": 9, "group": ["A"], "tags": ["c"]},
            {"id": 1, "grade": 9, "group": ["A"], "tags": ["a"]},
            {"id": 2, "grade": 9, "group": ["A"], "mandatory": true}
        ]"#,
    );

    let catalog = CourseCatalog::load_from_file(&path).unwrap();
    let ids: Vec<_> = catalog.courses().iter().map(|c| c.id.clone().unwrap()).collect();
    assert_eq!(
        ids,
        vec![CourseId::Number(3), CourseId::Number(1), CourseId::Number(2)]
    );

    fs::remove_file(path).ok();
}

#[test]
fn test_load_does_not_validate() {
    let path = write_temp_catalog(
        "no-mandatory",
        r#"[{"id": 1, "grade": 9, "group": ["A"], "tags": ["a"]}]"#,
    );

    let catalog = CourseCatalog::load_from_file(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(matches!(catalog.validate(), Err(CatalogError::NoMandatoryCourse)));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_malformed_file() {
    let path = write_temp_catalog("malformed", "[{\"grade\": 9,");

    let err = CourseCatalog::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError { .. }));
    assert!(err.to_string().contains("catalog-test-"));

    fs::remove_file(path).ok();
}
