//! Observability infrastructure for the tuning dashboard
//!
//! Provides:
//! - Prometheus metrics (generation latency, snapshots, evaluations by status)
//! - Structured JSON logging with tracing

use crate::models::Provider;
use crate::rules::Status;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Histogram buckets for generation latency (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.0001, 0.0005, 0.001, 0.005, 0.01,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<DashboardMetricsInner> = OnceLock::new();

struct DashboardMetricsInner {
    generation_latency_seconds: Histogram,
    snapshots_generated: IntCounterVec,
    evaluations: IntCounterVec,
    invalid_provider: IntCounter,
}

impl DashboardMetricsInner {
    fn new() -> Self {
        Self {
            generation_latency_seconds: register_histogram!(
                "tuning_dashboard_generation_latency_seconds",
                "Time spent generating a synthetic metric snapshot",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register generation_latency_seconds"),

            snapshots_generated: register_int_counter_vec!(
                "tuning_dashboard_snapshots_generated_total",
                "Total number of synthetic snapshots generated",
                &["provider"]
            )
            .expect("Failed to register snapshots_generated"),

            evaluations: register_int_counter_vec!(
                "tuning_dashboard_evaluations_total",
                "Total number of rule evaluations by outcome",
                &["provider", "status", "source"]
            )
            .expect("Failed to register evaluations"),

            invalid_provider: register_int_counter!(
                "tuning_dashboard_invalid_provider_total",
                "Total number of requests naming an unknown provider"
            )
            .expect("Failed to register invalid_provider"),
        }
    }
}

/// Where an evaluated snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationSource {
    Generated,
    Manual,
}

impl EvaluationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationSource::Generated => "generated",
            EvaluationSource::Manual => "manual",
        }
    }
}

/// Dashboard metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct DashboardMetrics {
    _private: (),
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(DashboardMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &DashboardMetricsInner {
        GLOBAL_METRICS.get_or_init(DashboardMetricsInner::new)
    }

    /// Record one generated snapshot and how long it took
    pub fn observe_generation(&self, provider: Provider, duration_secs: f64) {
        let inner = self.inner();
        inner.generation_latency_seconds.observe(duration_secs);
        inner
            .snapshots_generated
            .with_label_values(&[provider.as_str()])
            .inc();
    }

    /// Count an evaluation; `provider` is the name as requested
    pub fn inc_evaluations(&self, provider: &str, status: Status, source: EvaluationSource) {
        self.inner()
            .evaluations
            .with_label_values(&[provider, status.as_str(), source.as_str()])
            .inc();
    }

    pub fn inc_invalid_provider(&self) {
        self.inner().invalid_provider.inc();
    }
}

/// Structured logger for dashboard events
#[derive(Clone)]
pub struct StructuredLogger {
    instance: String,
}

impl StructuredLogger {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// Log an evaluation outcome, at warn level when critical
    pub fn log_evaluation(
        &self,
        provider: &str,
        source: EvaluationSource,
        status: Status,
        advisories: usize,
    ) {
        match status {
            Status::Critical => {
                warn!(
                    event = "metrics_evaluated",
                    instance = %self.instance,
                    provider = %provider,
                    source = source.as_str(),
                    status = %status,
                    advisories = advisories,
                    "Critical tuning advice produced"
                );
            }
            _ => {
                info!(
                    event = "metrics_evaluated",
                    instance = %self.instance,
                    provider = %provider,
                    source = source.as_str(),
                    status = %status,
                    advisories = advisories,
                    "Tuning advice produced"
                );
            }
        }
    }

    /// Log a request naming an unknown provider
    ///
    /// The evaluation still reports `normal` for these requests.
    pub fn log_invalid_provider(&self, provider: &str, source: EvaluationSource) {
        warn!(
            event = "invalid_provider",
            instance = %self.instance,
            provider = %provider,
            source = source.as_str(),
            "Unknown provider requested, status reported as normal"
        );
    }

    /// Log dashboard startup
    pub fn log_startup(&self, version: &str, addr: &str, seeded: bool) {
        info!(
            event = "dashboard_started",
            instance = %self.instance,
            version = %version,
            addr = %addr,
            seeded = seeded,
            "Tuning dashboard started"
        );
    }

    /// Log dashboard shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "dashboard_shutdown",
            instance = %self.instance,
            reason = %reason,
            "Tuning dashboard shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_metrics_creation() {
        // The Prometheus registry is global, handles share one registration
        let metrics = DashboardMetrics::new();
        let again = DashboardMetrics::new();

        metrics.observe_generation(Provider::Aws, 0.000_02);
        again.inc_evaluations("aws", Status::Warning, EvaluationSource::Generated);
        metrics.inc_invalid_provider();
    }

    #[test]
    fn test_evaluation_counter_is_labelled() {
        let metrics = DashboardMetrics::new();
        metrics.inc_evaluations("gcp", Status::Critical, EvaluationSource::Manual);

        let families = prometheus::gather();
        let evaluations = families
            .iter()
            .find(|f| f.get_name() == "tuning_dashboard_evaluations_total")
            .expect("evaluations counter registered");

        assert!(evaluations.get_metric().iter().any(|m| {
            m.get_label()
                .iter()
                .any(|l| l.get_name() == "source" && l.get_value() == "manual")
        }));
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test-instance");
        assert_eq!(logger.instance, "test-instance");
    }
}
