//! Tuning Dashboard - synthetic cloud metrics with tuning advice
//!
//! Serves drifting AWS/Azure/GCP metric snapshots, the threshold-based
//! recommendations derived from them, and a small dashboard page.

use anyhow::{Context, Result};
use dashboard_lib::{
    observability::{DashboardMetrics, StructuredLogger},
    MetricSource, SyntheticGenerator,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tuning_dashboard::{api, config};

const DASHBOARD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting tuning-dashboard");

    let config = config::DashboardConfig::load()?;
    info!(instance = %config.instance_name, "Dashboard configured");

    let generator: Arc<dyn MetricSource> = match config.seed {
        Some(seed) => Arc::new(SyntheticGenerator::with_seed(seed)),
        None => Arc::new(SyntheticGenerator::new()),
    };

    let metrics = DashboardMetrics::new();
    let logger = StructuredLogger::new(&config.instance_name);

    let addr = config.listen_addr();
    logger.log_startup(DASHBOARD_VERSION, &addr, config.seed.is_some());

    let app_state = Arc::new(api::AppState::new(generator, metrics, logger.clone()));
    let mut api_handle = tokio::spawn(api::serve(addr, app_state));

    tokio::select! {
        res = &mut api_handle => {
            res.context("API server task panicked")??;
            logger.log_shutdown("API server exited");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for shutdown signal")?;
            logger.log_shutdown("SIGINT received");
            api_handle.abort();
        }
    }

    info!("Shutting down");
    Ok(())
}
