//! Core domain types for the course catalog.
//!
//! This module defines the values that flow through the recommender:
//! - `Grade` and `CourseId` scalars, which accept either integers or strings
//!   (a grade may also be any other JSON value, which then only equals itself)
//! - `Course`, one immutable catalog record
//! - `StudentProfile`, the typed form of a recommendation request

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Scalars
// =============================================================================

/// School grade a course is offered at.
///
/// Grades are compared by exact equality: `Grade::Number(10)` never equals
/// `Grade::Text("10")`. Integral floats (`10.0`) read as `Number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Grade {
    Number(i64),
    Text(String),
    /// Fractional numbers, booleans and structures, kept verbatim
    Other(Value),
}

impl Grade {
    /// Normalize a decoded JSON value into a grade
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64().or_else(|| n.as_f64().and_then(integral)) {
                Some(i) => Grade::Number(i),
                None => Grade::Other(Value::Number(n)),
            },
            Value::String(s) => Grade::Text(s),
            other => Grade::Other(other),
        }
    }

    /// Whether the grade is truthy: non-zero, non-empty, `true`, or a
    /// structure.
    pub fn is_present(&self) -> bool {
        match self {
            Grade::Number(n) => *n != 0,
            Grade::Text(s) => !s.is_empty(),
            Grade::Other(Value::Null) => false,
            Grade::Other(Value::Bool(b)) => *b,
            Grade::Other(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Grade::Other(Value::String(s)) => !s.is_empty(),
            Grade::Other(Value::Array(_) | Value::Object(_)) => true,
        }
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Grade::from_json)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Number(n) => write!(f, "{}", n),
            Grade::Text(s) => f.write_str(s),
            Grade::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Integers parse as `Grade::Number`, anything else is kept as text.
impl FromStr for Grade {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(n) => Grade::Number(n),
            Err(_) => Grade::Text(s.to_string()),
        })
    }
}

impl From<i64> for Grade {
    fn from(n: i64) -> Self {
        Grade::Number(n)
    }
}

/// Identifier of a course record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{}", n),
            CourseId::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Course
// =============================================================================

/// One record of the course catalog.
///
/// Only `grade`, `group`, `mandatory` and `tags` take part in recommendation.
/// Everything else is display metadata; fields not modelled here are kept in
/// `metadata` so a course serializes back out the way it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub grade: Grade,

    /// Groups this course is offered to
    pub group: Vec<String>,

    #[serde(default)]
    pub mandatory: bool,

    /// Topic labels matched against a student's skills and interests
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Course {
    /// Create a course with no display metadata.
    pub fn new(grade: impl Into<Grade>, group: &[&str], mandatory: bool, tags: &[&str]) -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            grade: grade.into(),
            group: group.iter().map(|g| g.to_string()).collect(),
            mandatory,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: CourseId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the course is offered to `group` (membership, not equality)
    pub fn offered_to(&self, group: &str) -> bool {
        self.group.iter().any(|g| g == group)
    }

    /// Whether `student` may take this course by group
    pub fn offered_to_student(&self, student: &StudentProfile) -> bool {
        student.group.as_deref().is_some_and(|g| self.offered_to(g))
    }

    /// Human readable label: the title, else the id, else `"<untitled>"`
    pub fn label(&self) -> String {
        match (&self.title, &self.id) {
            (Some(title), _) => title.clone(),
            (None, Some(id)) => format!("course {}", id),
            (None, None) => "<untitled>".to_string(),
        }
    }
}

// =============================================================================
// Student
// =============================================================================

/// Typed recommendation request.
///
/// Requests arrive as untrusted JSON; build this through
/// `crate::profile::parse_student` so that the structural checks run.
/// `group` is `None` when the request named a group that is not a string;
/// such a student is offered no course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub grade: Grade,
    pub group: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl StudentProfile {
    pub fn new(
        grade: impl Into<Grade>,
        group: impl Into<String>,
        skills: &[&str],
        interests: &[&str],
    ) -> Self {
        Self {
            grade: grade.into(),
            group: Some(group.into()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grade_strict_equality() {
        assert_eq!(Grade::from(10_i64), Grade::Number(10));
        assert_ne!(Grade::Number(10), Grade::Text("10".to_string()));
    }

    #[test]
    fn test_grade_from_str() {
        assert_eq!("10".parse::<Grade>().unwrap(), Grade::Number(10));
        assert_eq!(
            "senior".parse::<Grade>().unwrap(),
            Grade::Text("senior".to_string())
        );
    }

    #[test]
    fn test_grade_from_json() {
        assert_eq!(Grade::from_json(json!(10)), Grade::Number(10));
        assert_eq!(Grade::from_json(json!(10.0)), Grade::Number(10));
        assert_eq!(Grade::from_json(json!("10th")), Grade::Text("10th".to_string()));
        assert_eq!(Grade::from_json(json!(10.5)), Grade::Other(json!(10.5)));
        assert_eq!(Grade::from_json(json!(true)), Grade::Other(json!(true)));
        assert_ne!(Grade::from_json(json!(true)), Grade::Number(1));
    }

    #[test]
    fn test_grade_truthiness() {
        assert!(Grade::Number(10).is_present());
        assert!(!Grade::Number(0).is_present());
        assert!(!Grade::Text(String::new()).is_present());
        assert!(Grade::Other(json!(true)).is_present());
        assert!(!Grade::Other(json!(false)).is_present());
        assert!(Grade::Other(json!(0.5)).is_present());
        assert!(Grade::Other(json!([])).is_present());
    }

    #[test]
    fn test_catalog_record_with_float_grade_and_negative_id() {
        let course: Course =
            serde_json::from_str(r#"{"id": -3, "grade": 10.0, "group": ["A"]}"#).unwrap();
        assert_eq!(course.id, Some(CourseId::Number(-3)));
        assert_eq!(course.grade, Grade::Number(10));
        assert!(course.metadata.is_empty());
        assert_eq!(serde_json::to_value(&course).unwrap()["grade"], 10);
    }

    #[test]
    fn test_course_keeps_unknown_fields() {
        let json = r#"{
            "id": 7,
            "title": "Algebra",
            "grade": 10,
            "group": ["A", "B"],
            "tags": ["math"],
            "credits": 3
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, Some(CourseId::Number(7)));
        assert!(!course.mandatory, "mandatory defaults to false");
        assert!(course.offered_to("B"));
        assert!(!course.offered_to("C"));
        assert_eq!(course.metadata.get("credits"), Some(&serde_json::json!(3)));

        let back = serde_json::to_value(&course).unwrap();
        assert_eq!(back["credits"], 3);
        assert_eq!(back["title"], "Algebra");
        assert!(back.get("description").is_none());
    }
}
