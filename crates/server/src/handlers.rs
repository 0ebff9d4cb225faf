//! HTTP handlers and routing.
//!
//! A single endpoint, `/api/recommend`. POST bodies are validated into a
//! `StudentProfile` before the recommender sees them; every other method
//! gets a 405.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::post,
    Json, Router,
};
use catalog::{parse_student_bytes, Course, ProfileError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::service::RecommendationService;

pub const RECOMMEND_PATH: &str = "/api/recommend";

/// Successful response body
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Course>,
}

/// Build the application router
pub fn router(service: RecommendationService) -> Router {
    Router::new()
        .route(
            RECOMMEND_PATH,
            post(recommend_handler).fallback(method_not_allowed),
        )
        .with_state(service)
}

/// `POST /api/recommend`
///
/// The body is read as raw bytes so that a missing or wrong content type is
/// reported the same way as any other malformed body. Bodies over axum's
/// default limit (2 MB) are a 400 as well.
pub async fn recommend_handler(
    State(service): State<RecommendationService>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!("Unreadable request body: {}", rejection);
        ApiError::from(ProfileError::UnreadableBody(rejection.body_text()))
    })?;

    let student = parse_student_bytes(&body).map_err(|e| {
        warn!("Rejected student data: {}", e);
        ApiError::from(e)
    })?;

    info!(
        "Recommendation request: grade {}, group {}, {} skills, {} interests",
        student.grade,
        student.group.as_deref().unwrap_or("<none>"),
        student.skills.len(),
        student.interests.len()
    );

    let recommendations = service.get_recommendations(student).await?;
    Ok(Json(RecommendationResponse { recommendations }))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
