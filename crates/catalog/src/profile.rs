//! Structural validation of untrusted student input.
//!
//! Requests carry arbitrary JSON. `parse_student` checks it field by field
//! and either returns a typed `StudentProfile` or a `ProfileError` naming the
//! first field that failed. Checks run in order: grade, group, skills,
//! interests.
//!
//! Only the shape is enforced: `grade` and `group` must be truthy and the
//! label fields must be arrays. Values that can never match a catalog entry
//! (a numeric group, a non-string label) are accepted and simply match
//! nothing.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::types::{Grade, StudentProfile};

/// Why a request body is not a usable student profile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The body could not be parsed as JSON at all
    #[error("request body is not valid JSON")]
    MalformedBody,

    /// The body could not be read, e.g. because it exceeds the size limit
    #[error("request body could not be read: {0}")]
    UnreadableBody(String),

    /// The body is JSON but not an object
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("`{field}` is required")]
    MissingField { field: &'static str },

    /// Zero, an empty string or `false`
    #[error("`grade` must be a non-zero number or a non-empty string")]
    InvalidGrade,

    /// Zero, an empty string or `false`
    #[error("`group` must not be empty")]
    InvalidGroup,

    #[error("`{field}` must be an array")]
    NotAnArray { field: &'static str },
}

/// Parse a raw request body
pub fn parse_student_bytes(body: &[u8]) -> Result<StudentProfile, ProfileError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ProfileError::MalformedBody)?;
    parse_student(&value)
}

/// Validate an already decoded JSON value
pub fn parse_student(value: &Value) -> Result<StudentProfile, ProfileError> {
    let object = value.as_object().ok_or(ProfileError::NotAnObject)?;

    let grade = parse_grade(required(object, "grade")?)?;
    let group = parse_group(required(object, "group")?)?;
    let skills = parse_labels(object, "skills")?;
    let interests = parse_labels(object, "interests")?;

    Ok(StudentProfile {
        grade,
        group,
        skills,
        interests,
    })
}

/// `null` counts as missing
fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ProfileError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ProfileError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn parse_grade(value: &Value) -> Result<Grade, ProfileError> {
    Some(Grade::from_json(value.clone()))
        .filter(Grade::is_present)
        .ok_or(ProfileError::InvalidGrade)
}

/// A truthy group that is not a string is kept as `None`
fn parse_group(value: &Value) -> Result<Option<String>, ProfileError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(Some(s.clone())),
        Value::String(_) | Value::Bool(false) => Err(ProfileError::InvalidGroup),
        Value::Number(n) if n.as_f64() == Some(0.0) => Err(ProfileError::InvalidGroup),
        other => {
            debug!("Non-text group {} matches no course", other);
            Ok(None)
        }
    }
}

/// Non-string items cannot equal a tag and are dropped
fn parse_labels(object: &Map<String, Value>, field: &'static str) -> Result<Vec<String>, ProfileError> {
    let items = required(object, field)?
        .as_array()
        .ok_or(ProfileError::NotAnArray { field })?;

    let labels: Vec<String> = items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect();
    if labels.len() < items.len() {
        debug!("Dropped {} non-text `{}` entries", items.len() - labels.len(), field);
    }
    Ok(labels)
}
