//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use dashboard_lib::{MetricSnapshot, Severity, Status, WorkloadMetrics};
use serde::Serialize;
use tabled::Tabled;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Row for a metric name/value table
#[derive(Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    pub name: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Color an aggregate status
pub fn color_status(status: Status) -> String {
    match status {
        Status::Normal => status.as_str().green().to_string(),
        Status::Warning => status.as_str().yellow().to_string(),
        Status::Critical => status.as_str().red().bold().to_string(),
    }
}

/// Color a rendered recommendation by its leading marker
pub fn color_recommendation(rendered: &str) -> String {
    match Severity::from_rendered(rendered) {
        Severity::Critical => rendered.red().to_string(),
        Severity::Warning => rendered.yellow().to_string(),
        Severity::Info => rendered.green().to_string(),
        Severity::Unrated => rendered.dimmed().to_string(),
    }
}

/// Print recommendations one per line, colored by severity
pub fn print_recommendations(recommendations: &[String]) {
    if recommendations.is_empty() {
        print_info("No recommendations");
        return;
    }
    for rec in recommendations {
        println!("  {}", color_recommendation(rec));
    }
}

/// Metric rows for the fields a snapshot carries
pub fn snapshot_rows(snapshot: &MetricSnapshot) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow {
            name: "cpu",
            value: format_percent(snapshot.cpu),
        },
        MetricRow {
            name: "mem",
            value: format_percent(snapshot.mem),
        },
        MetricRow {
            name: "disk",
            value: format_percent(snapshot.disk),
        },
        MetricRow {
            name: "network",
            value: format_percent(snapshot.network),
        },
    ];

    match snapshot.workload {
        WorkloadMetrics::Aws {
            db_latency,
            requests,
        } => {
            rows.push(MetricRow {
                name: "db_latency",
                value: format_millis(db_latency),
            });
            rows.push(MetricRow {
                name: "requests",
                value: requests.to_string(),
            });
        }
        WorkloadMetrics::Azure {
            request_rate,
            failure_rate,
        } => {
            rows.push(MetricRow {
                name: "request_rate",
                value: format!("{:.1}/s", request_rate),
            });
            rows.push(MetricRow {
                name: "failure_rate",
                value: format_percent(failure_rate),
            });
        }
        WorkloadMetrics::Gcp { qps, latency } => {
            rows.push(MetricRow {
                name: "qps",
                value: qps.to_string(),
            });
            rows.push(MetricRow {
                name: "latency",
                value: format_millis(latency),
            });
        }
    }

    rows
}

/// One-line workload summary, e.g. `db 85.0ms req 1300`
pub fn workload_summary(workload: &WorkloadMetrics) -> String {
    match *workload {
        WorkloadMetrics::Aws {
            db_latency,
            requests,
        } => format!("db {} req {}", format_millis(db_latency), requests),
        WorkloadMetrics::Azure {
            request_rate,
            failure_rate,
        } => format!("rate {:.1}/s fail {}", request_rate, format_percent(failure_rate)),
        WorkloadMetrics::Gcp { qps, latency } => {
            format!("qps {} lat {}", qps, format_millis(latency))
        }
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_millis(value: f64) -> String {
    format!("{:.1}ms", value)
}

/// Format unix seconds as a UTC timestamp
pub fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
