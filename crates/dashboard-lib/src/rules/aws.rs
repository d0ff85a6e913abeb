//! AWS tuning rules (EC2, EBS, RDS, ALB)

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
        warning_above: 75.0,
        critical: "AWS: Critically high CPU — scale out Auto Scaling Group or upgrade EC2 instance family (C5/C6).",
        warning: "AWS: CPU elevated — enable CloudWatch alarms + ASG target tracking.",
        healthy: Some("AWS: CPU within normal operating range."),
    },
    ThresholdRule {
        metric: MetricKey::Mem,
        critical_above: 85.0,
        warning_above: 65.0,
        critical: "AWS: Memory pressure — move to R-series (memory optimized) EC2 or increase container memory limits.",
        warning: "AWS: Moderate memory — inspect memory leaks via X-Ray or container profiling.",
        healthy: Some("AWS: Memory usage healthy."),
    },
    ThresholdRule {
        metric: MetricKey::Disk,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "AWS: Disk usage high — move from gp3 to io2, increase IOPS, or add EFS/EBS expansion.",
        warning: "AWS: Disk moderately high — check for slow EBS volumes.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Network,
        critical_above: 80.0,
        warning_above: 60.0,
        critical: "AWS: High network usage — consider ALB/NLB, enable caching (CloudFront), or use Global Accelerator.",
        warning: "AWS: Network traffic elevated — investigate noisy neighbor or unexpected traffic spikes.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::DbLatency,
        critical_above: 250.0,
        warning_above: 150.0,
        critical: "AWS RDS: Critical DB latency — add Read Replicas, increase instance class, or add Provisioned IOPS.",
        warning: "AWS RDS: Latency warning — tune slow queries using Performance Insights.",
        healthy: None,
    },
    ThresholdRule {
        metric: MetricKey::Requests,
        critical_above: 1500.0,
        warning_above: 900.0,
        critical: "AWS: High request load — scale out ASG, enable caching with CloudFront, or add API Gateway throttling.",
        warning: "AWS: Requests increasing — consider adding ALB or reviewing application concurrency.",
        healthy: None,
    },
];

const COMPOUNDS: [CompoundRule; 2] = [
    CompoundRule {
        first: (MetricKey::Cpu, 80.0),
        second: (MetricKey::Requests, 1200.0),
        severity: Severity::Critical,
        text: "AWS: CPU + traffic spike — apply target tracking autoscaling and enable Auto Scaling warm pools.",
    },
    CompoundRule {
        first: (MetricKey::Mem, 80.0),
        second: (MetricKey::DbLatency, 200.0),
        severity: Severity::Critical,
        text: "AWS: Memory + DB latency — indicates DB connection saturation. Check connection pool settings.",
    },
];
