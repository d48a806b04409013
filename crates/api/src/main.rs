//! Symptom Triage Service - Main Entry Point

use api::{init_logging, run_server, ServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::load()?;
    init_logging(&config)?;

    info!("=== Symptom Triage Service v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Rough risk estimates only. This service does not diagnose.");

    run_server(config).await?;

    Ok(())
}
