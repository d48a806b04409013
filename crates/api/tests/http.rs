//! End-to-end HTTP tests against a server bound on an ephemeral port

use api::{build_app, create_router, AppState, RateLimitConfig, ServiceConfig};
use axum::Router;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use triage_engine::DISCLAIMER;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_default() -> String {
    spawn(create_router(Arc::new(AppState::new()))).await
}

#[tokio::test]
async fn test_health() {
    let base = spawn_default().await;

    let resp = reqwest::get(format!("{}/api/v1/health", base)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rules"]["dangerPatterns"], 3);
    assert_eq!(body["rules"]["conditionCategories"], 5);
    assert!(body["message"].as_str().unwrap().contains("does not diagnose"));
}

#[tokio::test]
async fn test_emergency_assessment() {
    let base = spawn_default().await;

    let resp = Client::new()
        .post(format!("{}/api/v1/assessments", base))
        .json(&json!({
            "symptomText": "Chest pain and shortness of breath",
            "durationDays": 1,
            "severity": 7,
            "ageGroup": "adult"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["riskLevel"], "HIGH");
    assert_eq!(body["actionType"], "EMERGENCY");
    assert!(body["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(body["disclaimer"].as_str().unwrap().starts_with("This is NOT a diagnostic tool."));

    let rules: Vec<&str> = body["rulesMatched"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(rules.contains(&"danger_pattern_chest_pain_breathlessness"));

    let conditions = body["possibleConditions"].as_array().unwrap();
    assert!(conditions.contains(&json!("Possible cardiac or serious respiratory issue")));

    let explanation = body["explanation"].as_array().unwrap();
    assert_eq!(explanation.last().unwrap(), DISCLAIMER);
}

#[tokio::test]
async fn test_low_risk_with_selected_symptoms() {
    let base = spawn_default().await;

    let body: Value = Client::new()
        .post(format!("{}/api/v1/assessments", base))
        .json(&json!({
            "selectedSymptoms": ["Cough"],
            "durationDays": 0,
            "severity": 2,
            "ageGroup": "adult"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["riskLevel"], "LOW");
    assert_eq!(body["actionType"], "HOME");
    assert_eq!(body["possibleConditions"], json!(["Respiratory (lungs and breathing)"]));
}

#[tokio::test]
async fn test_validation_failure() {
    let base = spawn_default().await;

    let resp = Client::new()
        .post(format!("{}/api/v1/assessments", base))
        .json(&json!({"symptomText": "fever", "severity": "bad"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("are required"));
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let base = spawn_default().await;

    let resp = Client::new()
        .post(format!("{}/api/v1/assessments", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route() {
    let base = spawn_default().await;

    let resp = reqwest::get(format!("{}/api/v1/history", base)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn test_mock_alert() {
    let base = spawn_default().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/v1/alerts/mock", base))
        .json(&json!({"riskLevel": "HIGH", "message": "Chest pain reported"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], true);

    let resp = client
        .post(format!("{}/api/v1/alerts/mock", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_absent_without_recorder() {
    let base = spawn_default().await;

    let resp = reqwest::get(format!("{}/metrics", base)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_limit_rejects_after_burst() {
    let config = ServiceConfig {
        rate_limit: RateLimitConfig {
            per_second: 60,
            burst_size: 2,
        },
        ..Default::default()
    };
    let app = build_app(Arc::new(AppState::new()), &config).unwrap();
    let base = spawn(app).await;
    let client = Client::new();
    let url = format!("{}/api/v1/health", base);

    for _ in 0..2 {
        let resp = client.get(&url).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_cors_preflight_allows_client_origin() {
    let config = ServiceConfig::default();
    let app = build_app(Arc::new(AppState::new()), &config).unwrap();
    let base = spawn(app).await;

    let resp = Client::new()
        .request(Method::OPTIONS, format!("{}/api/v1/assessments", base))
        .header("Origin", config.client_origin.as_str())
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(config.client_origin.as_str())
    );
}
