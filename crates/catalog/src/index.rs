//! The in-memory course catalog.
//!
//! `CourseCatalog` owns the courses in file order and keeps an id lookup
//! table next to them. It is built once (at startup, or per test) and then
//! shared read-only, typically behind an `Arc`.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Course, CourseId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Immutable, ordered list of courses
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    /// Position of the first course carrying each id
    id_index: HashMap<CourseId, usize>,
}

impl CourseCatalog {
    /// Build a catalog from records, keeping their order
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut id_index = HashMap::new();
        for (position, course) in courses.iter().enumerate() {
            if let Some(id) = &course.id {
                id_index.entry(id.clone()).or_insert(position);
            }
        }
        Self { courses, id_index }
    }

    /// Parse a catalog from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let courses = parser::parse_courses(content, "<inline>")?;
        Ok(Self::from_courses(courses))
    }

    /// Load a catalog file
    ///
    /// Does not run `validate`; startup code decides how strict to be.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading course catalog from {:?}", path);
        let courses = parser::parse_courses_file(path)?;
        let catalog = Self::from_courses(courses);
        info!(
            "Loaded {} courses ({} groups, {} tags) from {:?}",
            catalog.len(),
            catalog.groups().len(),
            catalog.tags().len(),
            path
        );
        Ok(catalog)
    }

    /// All courses, in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Get a course by id
    pub fn get_course(&self, id: &CourseId) -> Option<&Course> {
        self.id_index.get(id).map(|&position| &self.courses[position])
    }

    /// The first course flagged as mandatory
    pub fn mandatory_course(&self) -> Option<&Course> {
        self.courses.iter().find(|course| course.mandatory)
    }

    /// Every group label any course is offered to, sorted
    pub fn groups(&self) -> BTreeSet<&str> {
        self.courses
            .iter()
            .flat_map(|course| course.group.iter().map(String::as_str))
            .collect()
    }

    /// Every tag used in the catalog, sorted
    pub fn tags(&self) -> BTreeSet<&str> {
        self.courses
            .iter()
            .flat_map(|course| course.tags.iter().map(String::as_str))
            .collect()
    }

    /// Check catalog integrity
    ///
    /// - exactly one course is mandatory
    /// - no two courses share an id
    pub fn validate(&self) -> Result<()> {
        match self.courses.iter().filter(|course| course.mandatory).count() {
            0 => return Err(CatalogError::NoMandatoryCourse),
            1 => {}
            count => return Err(CatalogError::MultipleMandatoryCourses { count }),
        }

        let mut seen = HashSet::new();
        for course in &self.courses {
            if let Some(id) = &course.id {
                if !seen.insert(id) {
                    return Err(CatalogError::DuplicateCourseId { id: id.clone() });
                }
            }
        }
        Ok(())
    }
}
