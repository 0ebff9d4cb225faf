//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GradeFilter, GroupFilter, NonMandatoryFilter};
use crate::traits::Filter;
use catalog::{Course, StudentProfile};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NonMandatoryFilter)
///     .add_filter(GradeFilter)
///     .add_filter(GroupFilter);
///
/// let eligible = pipeline.apply(catalog.courses(), &student);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard eligibility rules: not mandatory, same grade, offered
    /// to the student's group.
    pub fn eligibility() -> Self {
        Self::new()
            .add_filter(NonMandatoryFilter)
            .add_filter(GradeFilter)
            .add_filter(GroupFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the catalog.
    ///
    /// Output keeps catalog order.
    pub fn apply<'a>(&self, courses: &'a [Course], student: &StudentProfile) -> Vec<&'a Course> {
        let mut current: Vec<&'a Course> = courses.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, student);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
