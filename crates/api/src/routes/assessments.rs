//! Assessment Routes

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use triage_engine::AssessmentResult;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Appended to every assessment response
pub const RESPONSE_DISCLAIMER: &str = "This is NOT a diagnostic tool. It does not replace a \
                                       medical professional. If you feel unsafe or very unwell, \
                                       seek emergency care immediately.";

/// Response for the assessment endpoint
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    /// Correlation id for logs; assessments are not stored
    pub id: Uuid,
    #[serde(flatten)]
    pub assessment: AssessmentResult,
    pub disclaimer: &'static str,
}

/// Validate the body, run the triage engine, and return the result
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let input = state.validator.validate(&body).map_err(|errors| {
        warn!("Assessment request rejected: {}", errors.messages().join("; "));
        metrics::counter!("triage_validation_failures_total").increment(1);
        errors
    })?;

    let assessment = state.engine.assess(&input);
    let id = Uuid::new_v4();

    info!(
        %id,
        risk_level = %assessment.risk_level,
        action = %assessment.action_type,
        rules = assessment.rules_matched.len(),
        "Assessment completed"
    );
    metrics::counter!(
        "triage_assessments_total",
        "risk_level" => assessment.risk_level.as_str()
    )
    .increment(1);

    Ok(Json(AssessmentResponse {
        id,
        assessment,
        disclaimer: RESPONSE_DISCLAIMER,
    }))
}
