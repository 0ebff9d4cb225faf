//! # Recommendation Service
//!
//! Shared state behind the HTTP handlers: the catalog loaded at startup and
//! a configured `Recommender`. The recommendation itself is pure CPU work,
//! so it runs on tokio's blocking pool; a panic there surfaces as an
//! `ApiError::Internal` instead of tearing down the connection.

use std::sync::Arc;
use std::time::Instant;

use catalog::{Course, CourseCatalog, StudentProfile};
use recommender::Recommender;
use tracing::{debug, error, info};

use crate::error::ApiError;

/// Catalog plus recommender, cloned cheaply into each request
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<CourseCatalog>,
    recommender: Arc<Recommender>,
}

impl RecommendationService {
    pub fn new(catalog: CourseCatalog, recommender: Recommender) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender: Arc::new(recommender),
        }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Recommend courses for an already validated student
    pub async fn get_recommendations(&self, student: StudentProfile) -> Result<Vec<Course>, ApiError> {
        let start_time = Instant::now();

        let catalog = self.catalog.clone();
        let recommender = self.recommender.clone();
        let result = tokio::task::spawn_blocking(move || {
            recommender.recommend(&student, catalog.courses())
        })
        .await;

        let recommendations = match result {
            Ok(Ok(recommendations)) => recommendations,
            Ok(Err(e)) => {
                error!("Error in recommend handler: {}", e);
                return Err(ApiError::from(e));
            }
            Err(join_error) => {
                error!("Recommendation task failed: {}", join_error);
                return Err(ApiError::Internal(join_error.to_string()));
            }
        };

        info!(
            "Returned {} courses in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        debug!(
            "Recommended: {}",
            recommendations
                .iter()
                .map(Course::label)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(recommendations)
    }
}
