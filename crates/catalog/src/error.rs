//! Error types for the catalog crate.
//!
//! Loading errors (missing file, unreadable file, malformed JSON) and
//! integrity errors (mandatory course count, duplicate ids) share one enum
//! so callers can match on the exact failure.

use thiserror::Error;

use crate::types::CourseId;

/// Errors that can occur while loading or validating a course catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog document is not valid JSON or a record has the wrong shape
    ///
    /// serde_json reports the line and column, which ends up in the message.
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// No course in the catalog is flagged as mandatory
    #[error("Catalog has no mandatory course")]
    NoMandatoryCourse,

    /// More than one course is flagged as mandatory
    #[error("Catalog has {count} mandatory courses, expected exactly one")]
    MultipleMandatoryCourses { count: usize },

    /// Two records share the same identifier
    #[error("Duplicate course id: {id}")]
    DuplicateCourseId { id: CourseId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
