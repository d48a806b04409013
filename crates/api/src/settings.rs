//! Service configuration
//!
//! Layered from defaults, an optional `triage.toml`, then `TRIAGE__*`
//! environment variables (e.g. `TRIAGE__RATE_LIMIT__BURST_SIZE=10`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::rate_limit::RateLimitConfig;

/// Triage service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Browser origin allowed by CORS
    pub client_origin: String,
    /// Max tracing level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit JSON log lines instead of plain text
    pub log_json: bool,
    /// Per-IP rate limiting
    pub rate_limit: RateLimitConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:4000".to_string(),
            client_origin: "http://localhost:5173".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from `triage.toml` (if present) and the environment
    pub fn load() -> Result<Self, ApiError> {
        Self::layered(
            Config::builder()
                .add_source(File::with_name("triage").required(false))
                .add_source(
                    Environment::with_prefix("TRIAGE")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn layered(builder: ConfigBuilder<DefaultState>) -> Result<Self, ApiError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:4000");
        assert_eq!(config.client_origin, "http://localhost:5173");
        assert_eq!(config.rate_limit.burst_size, 5);
        assert!(!config.log_json);
    }

    #[test]
    fn test_empty_sources_give_defaults() {
        let config = ServiceConfig::layered(Config::builder()).unwrap();
        assert_eq!(config.bind_addr, ServiceConfig::default().bind_addr);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            bind_addr = "127.0.0.1:9000"
            log_json = true

            [rate_limit]
            burst_size = 20
        "#;
        let config = ServiceConfig::layered(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(config.log_json);
        assert_eq!(config.rate_limit.burst_size, 20);
        assert_eq!(config.rate_limit.per_second, 2);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_wrong_type_is_error() {
        let toml = r#"log_json = "sometimes""#;
        let result = ServiceConfig::layered(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        );
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
