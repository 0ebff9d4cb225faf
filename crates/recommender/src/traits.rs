//! Core traits for the eligibility pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the course catalog.

use catalog::{Course, StudentProfile};

/// Core trait for filtering courses.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to serve concurrent requests
/// - Filters borrow courses from the catalog and never modify them
/// - Filters must keep the relative order of the courses they keep; ranking
///   relies on catalog order to break ties
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of courses.
    ///
    /// # Arguments
    /// * `courses` - The courses still in play (takes ownership of the list)
    /// * `student` - The student recommendations are computed for
    fn apply<'a>(&self, courses: Vec<&'a Course>, student: &StudentProfile) -> Vec<&'a Course>;
}
