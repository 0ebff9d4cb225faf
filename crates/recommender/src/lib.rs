//! Course recommendation core.
//!
//! This crate provides:
//! - Filter trait and implementations for course eligibility
//! - FilterPipeline for composing filters
//! - Tag overlap scoring
//! - Recommender, which ranks eligible courses and appends the mandatory one
//!
//! ## Architecture
//! The recommender processes the catalog in stages:
//! 1. Filters remove ineligible courses (mandatory, wrong grade, wrong group)
//! 2. Remaining courses are scored against the student's skills ∪ interests
//! 3. Non-zero scores are ranked and the top two are kept
//! 4. The mandatory course is appended
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{CourseCatalog, Grade, StudentProfile};
//! use recommender::Recommender;
//!
//! let catalog = CourseCatalog::load_from_file(Path::new("data/courses.json"))?;
//! let student = StudentProfile::new(Grade::Number(10), "A", &["math"], &["art"]);
//!
//! let courses = Recommender::new().recommend(&student, catalog.courses())?;
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use error::{RecommendError, Result};
pub use filter_pipeline::FilterPipeline;
pub use recommender::{recommend, Recommender, DEFAULT_LIMIT};
pub use scoring::{score_course, InterestSet, ScoredCourse};
pub use traits::Filter;
