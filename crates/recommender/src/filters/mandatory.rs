//! Filter to take the mandatory course out of the ranking.
//!
//! The mandatory course is always appended to the result separately, so it
//! never competes for a ranked slot.

use crate::traits::Filter;
use catalog::{Course, StudentProfile};

/// Removes courses flagged as mandatory.
pub struct NonMandatoryFilter;

impl Filter for NonMandatoryFilter {
    fn name(&self) -> &str {
        "NonMandatoryFilter"
    }

    fn apply<'a>(&self, courses: Vec<&'a Course>, _student: &StudentProfile) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| !course.mandatory)
            .collect()
    }
}
