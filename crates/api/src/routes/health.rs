//! Health Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Health response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub rules: RuleSummary,
}

/// Sizes of the loaded rule tables
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub danger_patterns: usize,
    pub condition_categories: usize,
}

/// Health check handler
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Health triage API is running. This service does not diagnose diseases or \
                  replace a doctor.",
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        rules: RuleSummary {
            danger_patterns: state.engine.danger_patterns().len(),
            condition_categories: state.engine.categories().len(),
        },
    })
}
