//! Filter implementations for the eligibility pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod grade;
pub mod group;
pub mod mandatory;

// Re-export for convenience
pub use grade::GradeFilter;
pub use group::GroupFilter;
pub use mandatory::NonMandatoryFilter;
