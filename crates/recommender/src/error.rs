//! Error types for the recommender.

use thiserror::Error;

/// Failures of the recommendation computation itself.
///
/// Everything else (no eligible course, no matching tag, empty catalog
/// apart from the mandatory course) yields a shorter result, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The catalog contains no course flagged as mandatory.
    ///
    /// This is a data integrity problem on the server side, never the
    /// caller's fault.
    #[error("Mandatory course not found in catalog of {catalog_size} courses")]
    NoMandatoryCourse { catalog_size: usize },
}

pub type Result<T> = std::result::Result<T, RecommendError>;
