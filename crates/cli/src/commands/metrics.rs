//! Live metric commands against a running dashboard

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use crate::client::{ApiClient, MetricsReport};
use crate::output::{
    color_status, format_timestamp, print_json, print_recommendations, print_success,
    snapshot_rows, OutputFormat,
};

fn print_report(report: &MetricsReport) {
    println!(
        "{} {} at {}",
        report.snapshot.provider.label().bold(),
        color_status(report.status),
        format_timestamp(report.snapshot.timestamp)
    );

    let table = tabled::Table::new(snapshot_rows(&report.snapshot))
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}", table);

    println!("\nRecommendations:");
    print_recommendations(&report.recommendations);
}

/// Fetch one snapshot and its advice
pub async fn show_metrics(client: &ApiClient, provider: &str, format: OutputFormat) -> Result<()> {
    let report = client.metrics(provider).await?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

/// Poll `/metrics` every `interval` seconds, `count` times or until interrupted
pub async fn watch_metrics(
    client: &ApiClient,
    provider: &str,
    interval: u64,
    count: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut seen = 0u32;

    loop {
        ticker.tick().await;
        let report = client.metrics(provider).await?;

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            OutputFormat::Table => {
                print_report(&report);
                println!();
            }
        }

        seen += 1;
        if count.is_some_and(|n| seen >= n) {
            return Ok(());
        }
    }
}

/// Liveness check
pub async fn ping(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let pong = client.ping().await?;

    match format {
        OutputFormat::Json => print_json(&pong)?,
        OutputFormat::Table => print_success(&format!(
            "Dashboard is up (server time {})",
            format_timestamp(pong.ts)
        )),
    }

    Ok(())
}
