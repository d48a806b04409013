//! Prometheus Metrics Route

use axum::extract::State;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Render metrics in Prometheus text format, 404 if no recorder is installed
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(ApiError::NotFound)
}
