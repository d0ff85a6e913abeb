//! Threshold tables
//!
//! A provider's rules are plain data: per-metric tiers evaluated in order,
//! followed by compound rules over pairs of metrics. All comparisons are
//! strict, a value equal to a threshold does not cross it.

use super::advisory::{Advisory, Severity};
use crate::models::{MetricKey, MetricReadings};

/// Critical/warning tiers for a single metric
pub struct ThresholdRule {
    pub metric: MetricKey,
    pub critical_above: f64,
    pub warning_above: f64,
    pub critical: &'static str,
    pub warning: &'static str,
    /// Informational advice when neither tier is crossed, silent if `None`
    pub healthy: Option<&'static str>,
}

impl ThresholdRule {
    pub fn check(&self, readings: &MetricReadings) -> Option<Advisory> {
        let value = readings.get(self.metric);

        if value > self.critical_above {
            Some(Advisory::critical(self.critical))
        } else if value > self.warning_above {
            Some(Advisory::warning(self.warning))
        } else {
            self.healthy.map(Advisory::info)
        }
    }
}

/// Advice that fires only when two metrics both cross their own limits
pub struct CompoundRule {
    pub first: (MetricKey, f64),
    pub second: (MetricKey, f64),
    pub severity: Severity,
    pub text: &'static str,
}

impl CompoundRule {
    pub fn check(&self, readings: &MetricReadings) -> Option<Advisory> {
        let (first, first_above) = self.first;
        let (second, second_above) = self.second;

        (readings.get(first) > first_above && readings.get(second) > second_above)
            .then(|| Advisory::new(self.severity, self.text))
    }
}

/// Complete rule set for one provider
pub struct Rulebook {
    pub thresholds: &'static [ThresholdRule],
    pub compounds: &'static [CompoundRule],
}

impl Rulebook {
    /// Single-metric advice in table order, then compound advice
    pub fn apply(&self, readings: &MetricReadings) -> Vec<Advisory> {
        self.thresholds
            .iter()
            .filter_map(|rule| rule.check(readings))
            .chain(self.compounds.iter().filter_map(|rule| rule.check(readings)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPU_RULE: ThresholdRule = ThresholdRule {
        metric: MetricKey::Cpu,
        critical_above: 90.0,
        warning_above: 70.0,
        critical: "cpu critical",
        warning: "cpu warning",
        healthy: Some("cpu fine"),
    };

    const DISK_RULE: ThresholdRule = ThresholdRule {
        metric: MetricKey::Disk,
        critical_above: 85.0,
        warning_above: 60.0,
        critical: "disk critical",
        warning: "disk warning",
        healthy: None,
    };

    fn readings(cpu: f64, disk: f64) -> MetricReadings {
        MetricReadings {
            cpu,
            disk,
            ..Default::default()
        }
    }

    #[test]
    fn test_threshold_tiers() {
        assert_eq!(
            CPU_RULE.check(&readings(95.0, 0.0)),
            Some(Advisory::critical("cpu critical"))
        );
        assert_eq!(
            CPU_RULE.check(&readings(71.0, 0.0)),
            Some(Advisory::warning("cpu warning"))
        );
        assert_eq!(
            CPU_RULE.check(&readings(70.0, 0.0)),
            Some(Advisory::info("cpu fine"))
        );
    }

    #[test]
    fn test_silent_rule_emits_nothing_when_healthy() {
        assert_eq!(DISK_RULE.check(&readings(0.0, 60.0)), None);
        assert_eq!(
            DISK_RULE.check(&readings(0.0, 60.5)),
            Some(Advisory::warning("disk warning"))
        );
    }

    #[test]
    fn test_compound_needs_both_metrics() {
        let rule = CompoundRule {
            first: (MetricKey::Cpu, 80.0),
            second: (MetricKey::Disk, 50.0),
            severity: Severity::Critical,
            text: "both hot",
        };

        assert!(rule.check(&readings(81.0, 51.0)).is_some());
        assert!(rule.check(&readings(81.0, 50.0)).is_none());
        assert!(rule.check(&readings(80.0, 51.0)).is_none());
    }

    #[test]
    fn test_compounds_come_after_thresholds() {
        static THRESHOLDS: [ThresholdRule; 2] = [CPU_RULE, DISK_RULE];
        static COMPOUNDS: [CompoundRule; 1] = [CompoundRule {
            first: (MetricKey::Cpu, 80.0),
            second: (MetricKey::Disk, 50.0),
            severity: Severity::Critical,
            text: "both hot",
        }];
        let book = Rulebook {
            thresholds: &THRESHOLDS,
            compounds: &COMPOUNDS,
        };

        let advisories = book.apply(&readings(92.0, 70.0));
        let texts: Vec<_> = advisories.iter().map(|a| a.text.as_str()).collect();

        assert_eq!(texts, ["cpu critical", "disk warning", "both hot"]);
    }
}
