//! Core data models for the tuning dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cloud provider whose workload is simulated and evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    /// Lowercase identifier used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
        }
    }

    /// Display label used as the prefix of advisory text
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Provider::Aws => 0,
            Provider::Azure => 1,
            Provider::Gcp => 2,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a provider name is not one of aws, azure or gcp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider: {0:?} (expected aws, azure or gcp)")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            "gcp" => Ok(Provider::Gcp),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Provider-specific workload metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkloadMetrics {
    Aws { db_latency: f64, requests: u64 },
    Azure { request_rate: f64, failure_rate: f64 },
    Gcp { qps: u64, latency: f64 },
}

impl WorkloadMetrics {
    pub fn provider(&self) -> Provider {
        match self {
            WorkloadMetrics::Aws { .. } => Provider::Aws,
            WorkloadMetrics::Azure { .. } => Provider::Azure,
            WorkloadMetrics::Gcp { .. } => Provider::Gcp,
        }
    }
}

/// One generated metric snapshot for a provider
///
/// Serializes flat: common fields, the provider's workload fields,
/// `provider` and `timestamp` all at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub provider: Provider,
    /// Unix seconds
    pub timestamp: i64,
    pub cpu: f64,
    pub mem: f64,
    pub disk: f64,
    pub network: f64,
    #[serde(flatten)]
    pub workload: WorkloadMetrics,
}

/// Flat view of every metric any provider rule can look at
///
/// Metrics a snapshot does not carry stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricReadings {
    pub cpu: f64,
    pub mem: f64,
    pub disk: f64,
    pub network: f64,
    pub db_latency: f64,
    pub requests: i64,
    pub request_rate: f64,
    pub failure_rate: f64,
    pub qps: i64,
    pub latency: f64,
}

impl From<&MetricSnapshot> for MetricReadings {
    fn from(snapshot: &MetricSnapshot) -> Self {
        let mut readings = MetricReadings {
            cpu: snapshot.cpu,
            mem: snapshot.mem,
            disk: snapshot.disk,
            network: snapshot.network,
            ..Default::default()
        };

        match snapshot.workload {
            WorkloadMetrics::Aws {
                db_latency,
                requests,
            } => {
                readings.db_latency = db_latency;
                readings.requests = requests as i64;
            }
            WorkloadMetrics::Azure {
                request_rate,
                failure_rate,
            } => {
                readings.request_rate = request_rate;
                readings.failure_rate = failure_rate;
            }
            WorkloadMetrics::Gcp { qps, latency } => {
                readings.qps = qps as i64;
                readings.latency = latency;
            }
        }

        readings
    }
}

/// Metric names a rule can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Cpu,
    Mem,
    Disk,
    Network,
    DbLatency,
    Requests,
    RequestRate,
    FailureRate,
    Qps,
    Latency,
}

impl MetricKey {
    pub fn name(&self) -> &'static str {
        match self {
            MetricKey::Cpu => "cpu",
            MetricKey::Mem => "mem",
            MetricKey::Disk => "disk",
            MetricKey::Network => "network",
            MetricKey::DbLatency => "db_latency",
            MetricKey::Requests => "requests",
            MetricKey::RequestRate => "request_rate",
            MetricKey::FailureRate => "failure_rate",
            MetricKey::Qps => "qps",
            MetricKey::Latency => "latency",
        }
    }
}

impl MetricReadings {
    /// Read a metric as a float for threshold comparison
    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Cpu => self.cpu,
            MetricKey::Mem => self.mem,
            MetricKey::Disk => self.disk,
            MetricKey::Network => self.network,
            MetricKey::DbLatency => self.db_latency,
            MetricKey::Requests => self.requests as f64,
            MetricKey::RequestRate => self.request_rate,
            MetricKey::FailureRate => self.failure_rate,
            MetricKey::Qps => self.qps as f64,
            MetricKey::Latency => self.latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aws_snapshot() -> MetricSnapshot {
        MetricSnapshot {
            provider: Provider::Aws,
            timestamp: 1_700_000_000,
            cpu: 42.5,
            mem: 30.0,
            disk: 20.0,
            network: 10.0,
            workload: WorkloadMetrics::Aws {
                db_latency: 120.0,
                requests: 950,
            },
        }
    }

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!("aws".parse::<Provider>().unwrap(), Provider::Aws);
        assert_eq!("AZURE".parse::<Provider>().unwrap(), Provider::Azure);
        assert_eq!("Gcp".parse::<Provider>().unwrap(), Provider::Gcp);
    }

    #[test]
    fn test_provider_parse_rejects_unknown() {
        let err = "oracle".parse::<Provider>().unwrap_err();
        assert_eq!(err, UnknownProvider("oracle".to_string()));
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let json = serde_json::to_value(aws_snapshot()).unwrap();

        assert_eq!(json["provider"], "aws");
        assert_eq!(json["cpu"], 42.5);
        assert_eq!(json["db_latency"], 120.0);
        assert_eq!(json["requests"], 950);
        assert!(json.get("workload").is_none());
    }

    #[test]
    fn test_snapshot_deserializes_workload_by_shape() {
        let json = r#"{"provider":"gcp","timestamp":1,"cpu":1.0,"mem":2.0,
            "disk":3.0,"network":4.0,"qps":2100,"latency":210.5}"#;
        let snapshot: MetricSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            snapshot.workload,
            WorkloadMetrics::Gcp {
                qps: 2100,
                latency: 210.5
            }
        );
        assert_eq!(snapshot.workload.provider(), Provider::Gcp);
    }

    #[test]
    fn test_readings_zero_fill_foreign_metrics() {
        let readings = MetricReadings::from(&aws_snapshot());

        assert_eq!(readings.get(MetricKey::Requests), 950.0);
        assert_eq!(readings.get(MetricKey::DbLatency), 120.0);
        assert_eq!(readings.get(MetricKey::Qps), 0.0);
        assert_eq!(readings.get(MetricKey::FailureRate), 0.0);
    }
}
