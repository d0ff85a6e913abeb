//! Azure tuning rules (App Service, VMSS, Application Insights)

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
        critical: "Azure: CPU maxed — scale up App Service Plan (P1V3/P2V3) or use VMSS autoscale.",
        warning: "Azure: High CPU — enable autoscale rules based on % CPU + request count.",
        healthy: Some("Azure: CPU normal."),
    },
    ThresholdRule {
        metric: MetricKey::Mem,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "Azure: Memory high — increase service plan tier or check memory leaks with Application Insights Profiler.",
        warning: "Azure: Moderate memory — validate app recycle interval, container memory limits.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Disk,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "Azure: Disk pressure — upgrade to Premium SSD or Ultra Disk.",
        warning: "Azure: Disk moderately high — check IOPS throttling.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Network,
        critical_above: 80.0,
        warning_above: 60.0,
        critical: "Azure: High network load — add Azure Front Door or Traffic Manager.",
        warning: "Azure: Elevated network — enable CDN caching.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::RequestRate,
        critical_above: 350.0,
        warning_above: 200.0,
        critical: "Azure: Heavy request rate — enable autoscale rules using App Service scale-out.",
        warning: "Azure: Increasing request rate — configure Azure API Management caching.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::FailureRate,
        critical_above: 4.0,
        warning_above: 2.0,
        critical: "Azure: High failure rate — examine Application Insights traces for 5xx errors.",
        warning: "Azure: Noticeable failures — check dependency availability.",
        healthy: None,
    },
];

const COMPOUNDS: [CompoundRule; 2] = [
    CompoundRule {
        first: (MetricKey::Cpu, 80.0),
        second: (MetricKey::RequestRate, 300.0),
        severity: Severity::Critical,
        text: "Azure: CPU + load spike — configure scale rules with CPU & HTTP queue length.",
    },
    CompoundRule {
        first: (MetricKey::Mem, 80.0),
        second: (MetricKey::FailureRate, 3.0),
        severity: Severity::Critical,
        text: "Azure: Memory + failures — likely thread exhaustion or memory leak.",
    },
];
