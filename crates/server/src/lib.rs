//! Server crate for the course recommender.
//!
//! This crate exposes the recommender over HTTP: request validation,
//! error-to-status mapping, configuration and the shared service state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::{router, RecommendationResponse, RECOMMEND_PATH};
pub use service::RecommendationService;
