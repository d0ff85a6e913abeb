//! GCP tuning rules (MIG, GKE, Cloud CDN, Memorystore)

use super::advisory::Severity;
use super::rulebook::{CompoundRule, Rulebook, ThresholdRule};
use crate::models::MetricKey;

pub static RULEBOOK: Rulebook = Rulebook {
    thresholds: &THRESHOLDS,
    compounds: &COMPOUNDS,
};

const THRESHOLDS: [ThresholdRule; 6] = [
    ThresholdRule {
        metric: MetricKey::Cpu,
        critical_above: 90.0,
        warning_above: 70.0,
        critical: "GCP: CPU saturated — scale MIG (Managed Instance Groups) or move to C2/C3 machine types.",
        warning: "GCP: High CPU — analyze hot paths with Cloud Profiler.",
        healthy: Some("GCP: CPU healthy."),
    },
    ThresholdRule {
        metric: MetricKey::Mem,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "GCP: Memory at limit — switch to memory-optimized (M2/M3) instances.",
        warning: "GCP: Memory rising — check container memory and GKE HPA/VPA policies.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Disk,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "GCP: Disk heavy — upgrade Persistent Disk to SSD or increase I/O limits.",
        warning: "GCP: Disk moderate — examine slow queries or log spikes.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Network,
        critical_above: 80.0,
        warning_above: 60.0,
        critical: "GCP: Network congestion — use Cloud CDN, global load balancing.",
        warning: "GCP: Elevated network — investigate large egress patterns.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Latency,
        critical_above: 250.0,
        warning_above: 120.0,
        critical: "GCP: Critical latency — use Cloud Tasks, Memorystore caching, or split microservices.",
        warning: "GCP: Latency high — tune database or add regional replicas.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Qps,
        critical_above: 2500.0,
        warning_above: 1400.0,
        critical: "GCP: Very high QPS — scale MIG + enable Global Load Balancer.",
        warning: "GCP: QPS rising — increase minimum instances.",
        healthy: None,
    },
];

const COMPOUNDS: [CompoundRule; 1] = [CompoundRule {
    first: (MetricKey::Qps, 2000.0),
    second: (MetricKey::Latency, 200.0),
    severity: Severity::Critical,
    text: "GCP: QPS + latency spike — enable autoscaling based on request count & latency.",
}];
