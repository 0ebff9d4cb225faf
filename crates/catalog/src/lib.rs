//! # Catalog Crate
//!
//! Domain types and loading for the course catalog.
//!
//! ## Main Components
//!
//! - **types**: `Course`, `StudentProfile` and the `Grade` / `CourseId` scalars
//! - **parser**: parse JSON catalog documents into courses
//! - **index**: `CourseCatalog`, the ordered in-memory catalog plus integrity checks
//! - **profile**: structural validation of untrusted student input
//! - **error**: error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CourseCatalog;
//! use std::path::Path;
//!
//! let catalog = CourseCatalog::load_from_file(Path::new("data/courses.json"))?;
//! catalog.validate()?;
//!
//! let mandatory = catalog.mandatory_course().unwrap();
//! println!("{} courses, mandatory: {}", catalog.len(), mandatory.label());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod profile;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::CourseCatalog;
pub use profile::{parse_student, parse_student_bytes, ProfileError};
pub use types::{Course, CourseId, Grade, StudentProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let catalog = CourseCatalog::from_json_str(
            r#"[
                {"id": "alg-1", "title": "Algebra", "grade": 10, "group": ["A"], "tags": ["math"]},
                {"id": "orient", "title": "Orientation", "grade": 10, "group": ["A", "B"], "mandatory": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.validate().is_ok());

        let mandatory = catalog.mandatory_course().unwrap();
        assert_eq!(mandatory.label(), "Orientation");
        assert!(mandatory.tags.is_empty(), "tags default to empty");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = CourseCatalog::from_json_str(r#"{"grade": 10}"#).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }
}
