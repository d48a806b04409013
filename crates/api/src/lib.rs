//! Symptom Triage API Server
//!
//! REST API around the triage engine. Stateless: nothing is persisted.

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use request_validator::Validator;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use triage_engine::TriageEngine;

pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod settings;

pub use settings::ServiceConfig;
pub use error::ApiError;
pub use rate_limit::RateLimitConfig;

/// Application state shared across handlers
pub struct AppState {
    pub engine: TriageEngine,
    pub validator: Validator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Prometheus handle, if a recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state with the built-in rule tables
    pub fn new() -> Self {
        Self {
            engine: TriageEngine::new(),
            validator: Validator::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            metrics: None,
        }
    }

    /// Expose metrics from this recorder handle on `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the application router (no CORS or rate limiting)
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(routes::health::get_health))
        .route("/api/v1/assessments", post(routes::assessments::create_assessment))
        .route("/api/v1/alerts/mock", post(routes::alerts::trigger_mock_alert))
        .route("/metrics", get(routes::metrics::get_metrics))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router with CORS and per-IP rate limiting, as served in production
pub fn build_app(state: Arc<AppState>, config: &ServiceConfig) -> Result<Router, ApiError> {
    let origin = config
        .client_origin
        .parse::<HeaderValue>()
        .map_err(|_| ApiError::InvalidOrigin(config.client_origin.clone()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let governor = rate_limit::create_governor_config(&config.rate_limit)?;

    Ok(create_router(state).layer(
        ServiceBuilder::new()
            .layer(cors)
            .layer(GovernorLayer { config: governor }),
    ))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Initialize logging
pub fn init_logging(config: &ServiceConfig) -> Result<(), ApiError> {
    let level: Level = config
        .log_level
        .parse()
        .map_err(|_| ApiError::InvalidLogLevel(config.log_level.clone()))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| ApiError::Logging(e.to_string()))
}

/// Install the global Prometheus recorder
pub fn install_metrics() -> Result<PrometheusHandle, ApiError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ApiError::Metrics(e.to_string()))
}

/// Run the server
pub async fn run_server(config: ServiceConfig) -> Result<(), ApiError> {
    let state = Arc::new(AppState::new().with_metrics(install_metrics()?));
    let app = build_app(state, &config)?;

    info!("Starting triage API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origin_rejected() {
        let config = ServiceConfig {
            client_origin: "bad\norigin".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            build_app(Arc::new(AppState::new()), &config),
            Err(ApiError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = ServiceConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(init_logging(&config), Err(ApiError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_state_uses_builtin_rules() {
        let state = AppState::new();
        assert_eq!(state.engine.danger_patterns().len(), 3);
        assert_eq!(state.engine.categories().len(), 5);
        assert!(state.metrics.is_none());
    }
}
