//! Rule evaluation entry points

use super::advisory::{Advisory, Severity, Status};
use super::rulebook::Rulebook;
use super::{aws, azure, gcp};
use crate::models::{MetricReadings, Provider};
use serde::{Deserialize, Serialize};

/// Text of the advisory returned for an unrecognized provider
pub const INVALID_PROVIDER: &str = "Invalid provider";

/// Advisories for one snapshot and their aggregate status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub advisories: Vec<Advisory>,
    pub status: Status,
}

impl Evaluation {
    pub fn from_advisories(advisories: Vec<Advisory>) -> Self {
        let status = Status::aggregate(&advisories);
        Self { advisories, status }
    }

    /// Advisories rendered with their severity markers, in order
    pub fn recommendations(&self) -> Vec<String> {
        self.advisories.iter().map(ToString::to_string).collect()
    }

    /// True when the provider name could not be resolved
    pub fn is_invalid_provider(&self) -> bool {
        matches!(
            self.advisories.as_slice(),
            [Advisory { severity: Severity::Unrated, text }] if text == INVALID_PROVIDER
        )
    }
}

fn rulebook(provider: Provider) -> &'static Rulebook {
    match provider {
        Provider::Aws => &aws::RULEBOOK,
        Provider::Azure => &azure::RULEBOOK,
        Provider::Gcp => &gcp::RULEBOOK,
    }
}

/// Evaluate a provider's threshold rules against a set of readings
pub fn evaluate(provider: Provider, readings: &MetricReadings) -> Evaluation {
    Evaluation::from_advisories(rulebook(provider).apply(readings))
}

/// Evaluate by provider name, case-insensitively
///
/// An unknown name yields a single unrated "Invalid provider" advisory, so
/// the aggregate status stays `normal`.
pub fn evaluate_named(provider: &str, readings: &MetricReadings) -> Evaluation {
    match provider.parse::<Provider>() {
        Ok(provider) => evaluate(provider, readings),
        Err(_) => Evaluation::from_advisories(vec![Advisory::new(
            Severity::Unrated,
            INVALID_PROVIDER,
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(evaluation: &Evaluation) -> Vec<&str> {
        evaluation
            .advisories
            .iter()
            .map(|a| a.text.as_str())
            .collect()
    }

    #[test]
    fn test_cpu_boundary_is_strict_for_every_provider() {
        for provider in Provider::ALL {
            let at = MetricReadings {
                cpu: 90.0,
                ..Default::default()
            };
            let above = MetricReadings {
                cpu: 90.1,
                ..Default::default()
            };

            let at_eval = evaluate(provider, &at);
            let above_eval = evaluate(provider, &above);

            assert!(
                !at_eval
                    .advisories
                    .iter()
                    .any(|a| a.severity == Severity::Critical),
                "{} fired critical at cpu = 90.0",
                provider
            );
            assert_eq!(at_eval.status, Status::Warning);
            assert_eq!(above_eval.advisories[0].severity, Severity::Critical);
            assert_eq!(above_eval.status, Status::Critical);
        }
    }

    #[test]
    fn test_aws_cpu_and_traffic_compound() {
        let readings = MetricReadings {
            cpu: 85.0,
            requests: 1300,
            mem: 50.0,
            disk: 10.0,
            network: 10.0,
            db_latency: 50.0,
            ..Default::default()
        };

        let evaluation = evaluate(Provider::Aws, &readings);
        let texts = texts(&evaluation);

        assert!(texts[0].starts_with("AWS: CPU elevated"));
        assert!(texts.iter().any(|t| t.starts_with("AWS: Requests increasing")));
        assert!(texts.last().is_some_and(|t| t.starts_with("AWS: CPU + traffic spike")));
        assert_eq!(evaluation.status, Status::Critical);
    }

    #[test]
    fn test_aws_all_clear_keeps_healthy_messages() {
        let evaluation = evaluate(Provider::Aws, &MetricReadings::default());

        assert_eq!(
            evaluation.recommendations(),
            vec![
                "🟢 AWS: CPU within normal operating range.".to_string(),
                "🟢 AWS: Memory usage healthy.".to_string(),
            ]
        );
        assert_eq!(evaluation.status, Status::Normal);
    }

    #[test]
    fn test_zero_readings_are_normal_for_every_provider() {
        for provider in Provider::ALL {
            let evaluation = evaluate(provider, &MetricReadings::default());
            assert_eq!(evaluation.status, Status::Normal, "{}", provider);
            assert!(!evaluation.advisories.is_empty());
        }
    }

    #[test]
    fn test_azure_memory_and_failures_compound() {
        let readings = MetricReadings {
            cpu: 50.0,
            mem: 82.0,
            failure_rate: 3.5,
            ..Default::default()
        };

        let evaluation = evaluate(Provider::Azure, &readings);
        let texts = texts(&evaluation);

        assert_eq!(
            texts,
            vec![
                "Azure: CPU normal.",
                "Azure: Moderate memory — validate app recycle interval, container memory limits.",
                "Azure: Noticeable failures — check dependency availability.",
                "Azure: Memory + failures — likely thread exhaustion or memory leak.",
            ]
        );
        assert_eq!(evaluation.status, Status::Critical);
    }

    #[test]
    fn test_gcp_qps_latency_compound() {
        let readings = MetricReadings {
            cpu: 30.0,
            qps: 2100,
            latency: 210.0,
            ..Default::default()
        };

        let evaluation = evaluate(Provider::Gcp, &readings);
        let texts = texts(&evaluation);

        assert!(texts.contains(&"GCP: QPS rising — increase minimum instances."));
        assert!(texts.contains(&"GCP: Latency high — tune database or add regional replicas."));
        assert_eq!(
            texts.last(),
            Some(&"GCP: QPS + latency spike — enable autoscaling based on request count & latency.")
        );
    }

    #[test]
    fn test_rules_only_read_their_provider_metrics() {
        // GCP-only metrics do not trip AWS rules
        let readings = MetricReadings {
            qps: 9000,
            latency: 900.0,
            ..Default::default()
        };

        assert_eq!(evaluate(Provider::Aws, &readings).status, Status::Normal);
        assert_eq!(evaluate(Provider::Gcp, &readings).status, Status::Critical);
    }

    #[test]
    fn test_evaluate_named_is_case_insensitive() {
        let readings = MetricReadings {
            cpu: 95.0,
            ..Default::default()
        };

        assert_eq!(
            evaluate_named("AzUrE", &readings),
            evaluate(Provider::Azure, &readings)
        );
    }

    #[test]
    fn test_unknown_provider_yields_sentinel() {
        let readings = MetricReadings {
            cpu: 99.0,
            ..Default::default()
        };

        let evaluation = evaluate_named("oracle", &readings);

        assert!(evaluation.is_invalid_provider());
        assert_eq!(evaluation.recommendations(), vec![INVALID_PROVIDER]);
        assert_eq!(evaluation.status, Status::Normal);
        assert!(!evaluate(Provider::Aws, &readings).is_invalid_provider());
    }

    fn readings_strategy() -> impl Strategy<Value = MetricReadings> {
        (
            (0.0..100.0f64, 0.0..100.0f64, 0.0..100.0f64, 0.0..100.0f64),
            (0.0..400.0f64, 0..2500i64, 0.0..520.0f64),
            (0.0..14.0f64, 0..3500i64, 0.0..530.0f64),
        )
            .prop_map(
                |(
                    (cpu, mem, disk, network),
                    (db_latency, requests, request_rate),
                    (failure_rate, qps, latency),
                )| MetricReadings {
                    cpu,
                    mem,
                    disk,
                    network,
                    db_latency,
                    requests,
                    request_rate,
                    failure_rate,
                    qps,
                    latency,
                },
            )
    }

    fn provider_strategy() -> impl Strategy<Value = Provider> {
        prop_oneof![Just(Provider::Aws), Just(Provider::Azure), Just(Provider::Gcp)]
    }

    proptest! {
        #[test]
        fn prop_evaluation_is_pure(
            provider in provider_strategy(),
            readings in readings_strategy(),
        ) {
            prop_assert_eq!(evaluate(provider, &readings), evaluate(provider, &readings));
        }

        #[test]
        fn prop_status_matches_advisories(
            provider in provider_strategy(),
            readings in readings_strategy(),
        ) {
            let evaluation = evaluate(provider, &readings);
            let has = |severity: Severity| {
                evaluation.advisories.iter().any(|a| a.severity == severity)
            };
            let (has_critical, has_warning) = (has(Severity::Critical), has(Severity::Warning));

            let expected = if has_critical {
                Status::Critical
            } else if has_warning {
                Status::Warning
            } else {
                Status::Normal
            };
            prop_assert_eq!(evaluation.status, expected);
        }

        #[test]
        fn prop_cpu_always_reported(
            provider in provider_strategy(),
            readings in readings_strategy(),
        ) {
            // cpu is the one metric every provider comments on
            let evaluation = evaluate(provider, &readings);
            prop_assert!(evaluation.advisories[0].text.contains("CPU"));
        }
    }
}
