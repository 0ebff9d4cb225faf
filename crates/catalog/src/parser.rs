//! Parser for catalog documents.
//!
//! A catalog is a JSON array of course records:
//!
//! ```json
//! [
//!   { "id": 1, "title": "Algebra", "grade": 10, "group": ["A"], "tags": ["math"] },
//!   { "id": 2, "title": "Orientation", "grade": 10, "group": ["A"], "mandatory": true, "tags": [] }
//! ]
//! ```
//!
//! Record order is kept; it is the tie-break order for equal scores.

use crate::error::{CatalogError, Result};
use crate::types::Course;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a catalog file into memory
fn read_catalog_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

/// Parse a catalog document
///
/// `source_name` only feeds error messages (usually the file name).
pub fn parse_courses(content: &str, source_name: &str) -> Result<Vec<Course>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a catalog file from disk
pub fn parse_courses_file(path: &Path) -> Result<Vec<Course>> {
    let content = read_catalog_file(path)?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_courses(&content, &source_name)
}
