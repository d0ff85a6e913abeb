//! HTTP API for the dashboard page, tuning advice and Prometheus metrics

use crate::error::{ApiError, Result};
use crate::manual::ManualPayload;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use dashboard_lib::{
    evaluate_named, DashboardMetrics, Evaluation, EvaluationSource, MetricReadings,
    MetricSnapshot, MetricSource, Provider, Status, StructuredLogger,
};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

const DASHBOARD_PAGE: &str = include_str!("../assets/dashboard.html");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn MetricSource>,
    pub metrics: DashboardMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn MetricSource>,
        metrics: DashboardMetrics,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            generator,
            metrics,
            logger,
        }
    }

    /// Count and log one evaluation
    fn record(&self, provider: &str, source: EvaluationSource, evaluation: &Evaluation) {
        if evaluation.is_invalid_provider() {
            self.metrics.inc_invalid_provider();
            self.logger.log_invalid_provider(provider, source);
        }

        // One series per canonical provider, whatever casing was requested
        let label = provider
            .parse::<Provider>()
            .map(|p| p.as_str())
            .unwrap_or("invalid");
        self.metrics.inc_evaluations(label, evaluation.status, source);
        self.logger.log_evaluation(
            provider,
            source,
            evaluation.status,
            evaluation.advisories.len(),
        );
    }
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub provider: Option<String>,
}

/// Snapshot fields plus the advice derived from them
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub snapshot: MetricSnapshot,
    pub recommendations: Vec<String>,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManualResponse {
    /// The ten coerced readings that were evaluated
    pub metrics: MetricReadings,
    pub recommendations: Vec<String>,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub ts: i64,
}

/// Dashboard page
async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Generate a fresh snapshot and evaluate it
///
/// Generation falls back to AWS for an unknown provider while evaluation
/// sees the name as requested, so the response carries "Invalid provider".
async fn metrics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MetricsQuery>,
) -> Json<MetricsResponse> {
    let requested = query
        .provider
        .unwrap_or_else(|| Provider::default().as_str().to_string());
    let provider = requested.parse::<Provider>().unwrap_or_default();

    let start = Instant::now();
    let snapshot = state.generator.generate(provider);
    state
        .metrics
        .observe_generation(provider, start.elapsed().as_secs_f64());

    let evaluation = evaluate_named(&requested, &MetricReadings::from(&snapshot));
    state.record(&requested, EvaluationSource::Generated, &evaluation);

    Json(MetricsResponse {
        snapshot,
        recommendations: evaluation.recommendations(),
        status: evaluation.status,
    })
}

/// Evaluate caller-supplied readings
async fn manual(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<ManualResponse>> {
    let payload = ManualPayload::from_body(&body)?;

    let evaluation = evaluate_named(&payload.provider, &payload.readings);
    state.record(&payload.provider, EvaluationSource::Manual, &evaluation);

    Ok(Json(ManualResponse {
        metrics: payload.readings,
        recommendations: evaluation.recommendations(),
        status: evaluation.status,
    }))
}

/// Liveness check
async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        ts: chrono::Utc::now().timestamp(),
    })
}

/// Prometheus metrics endpoint
async fn prometheus_metrics() -> Result<impl IntoResponse> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::Internal(format!("failed to encode metrics: {}", e)))?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    ))
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .route("/manual", post(manual))
        .route("/ping", get(ping))
        .route("/prometheus", get(prometheus_metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(addr: String, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
