//! Alert Routes
//!
//! Stand-in for an SMS/email escalation to emergency contacts: the alert is
//! logged and acknowledged, nothing is sent.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mock alert request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockAlertRequest {
    pub risk_level: Option<String>,
    pub message: Option<String>,
}

/// Mock alert acknowledgement
#[derive(Debug, Serialize)]
pub struct MockAlertResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// Log a high-risk alert; a missing or unparseable body counts as empty
pub async fn trigger_mock_alert(body: Option<Json<MockAlertRequest>>) -> Json<MockAlertResponse> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    warn!(
        risk_level = request.risk_level.as_deref().unwrap_or("unknown"),
        message = request.message.as_deref().unwrap_or(""),
        "[MOCK ALERT] High risk assessment alert"
    );
    metrics::counter!("triage_mock_alerts_total").increment(1);

    Json(MockAlertResponse {
        ok: true,
        message: "Mock alert triggered. In a production system this would send an SMS/email to \
                  emergency contacts or a healthcare provider.",
    })
}
