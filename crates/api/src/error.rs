//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use request_validator::ValidationErrors;
use serde_json::json;
use thiserror::Error;

/// Message returned with every 400 from the assessment endpoint
pub const VALIDATION_MESSAGE: &str =
    "symptomText (string), durationDays (number), severity (number), and ageGroup are required";

/// Errors surfaced by the service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Route not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("Rate limit needs non-zero values (per_second={per_second}, burst_size={burst_size})")]
    RateLimitConfig { per_second: u64, burst_size: u32 },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Metrics recorder setup failed: {0}")]
    Metrics(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": VALIDATION_MESSAGE,
                    "errors": errors.messages(),
                })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Route not found" })),
            )
                .into_response(),
            other => {
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
