//! Mapping of request failures to HTTP responses.
//!
//! Three mutually exclusive conditions, checked in this order:
//! wrong method (405), malformed student data (400), failure inside the
//! recommender (500). Only the first two explain themselves to the caller.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use catalog::ProfileError;
use recommender::RecommendError;
use thiserror::Error;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests are allowed.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,

    #[error("Invalid student data provided: {0}")]
    BadRequest(#[from] ProfileError),

    /// Catalog integrity failure detected while recommending
    #[error("Recommendation failed: {0}")]
    Recommendation(#[from] RecommendError),

    /// Anything else that went wrong server side (e.g. a panicked worker)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Recommendation(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text safe to show the caller. Server-side failures stay opaque.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Recommendation(_) | ApiError::Internal(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.public_message() }));

        let mut response = (status, body).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
