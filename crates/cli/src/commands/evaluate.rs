//! Manual evaluation command

use anyhow::Result;

use crate::client::{ApiClient, ManualRequest};
use crate::output::{color_status, print_json, print_recommendations, MetricRow, OutputFormat};

/// Send readings to `/manual` and show the resulting advice
pub async fn evaluate(
    client: &ApiClient,
    request: &ManualRequest,
    format: OutputFormat,
) -> Result<()> {
    let report = client.manual(request).await?;

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            let r = &report.metrics;
            let rows: Vec<MetricRow> = [
                ("cpu", r.cpu.to_string()),
                ("mem", r.mem.to_string()),
                ("disk", r.disk.to_string()),
                ("network", r.network.to_string()),
                ("db_latency", r.db_latency.to_string()),
                ("requests", r.requests.to_string()),
                ("request_rate", r.request_rate.to_string()),
                ("failure_rate", r.failure_rate.to_string()),
                ("qps", r.qps.to_string()),
                ("latency", r.latency.to_string()),
            ]
            .into_iter()
            .map(|(name, value)| MetricRow { name, value })
            .collect();

            println!(
                "Provider: {}  Status: {}",
                request.provider,
                color_status(report.status)
            );
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            println!("\nRecommendations:");
            print_recommendations(&report.recommendations);
        }
    }

    Ok(())
}
