//! Offline simulation: run the generator and rules in-process

use anyhow::Result;
use dashboard_lib::{evaluate, MetricReadings, MetricSource, Provider, Status, SyntheticGenerator};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{
    color_status, format_percent, print_info, print_json, workload_summary, OutputFormat,
};

/// Row for the simulation table
#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Mem")]
    mem: String,
    #[tabled(rename = "Disk")]
    disk: String,
    #[tabled(rename = "Net")]
    network: String,
    #[tabled(rename = "Workload")]
    workload: String,
    #[tabled(rename = "Advice")]
    advice: usize,
    #[tabled(rename = "Status")]
    status: String,
}

/// Sample plus its evaluation, as emitted in JSON mode
#[derive(Serialize)]
struct Sample {
    #[serde(flatten)]
    snapshot: dashboard_lib::MetricSnapshot,
    recommendations: Vec<String>,
    status: Status,
}

/// Status counts over a run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusTally {
    pub fn add(&mut self, status: Status) {
        match status {
            Status::Normal => self.normal += 1,
            Status::Warning => self.warning += 1,
            Status::Critical => self.critical += 1,
        }
    }
}

fn run(provider: Provider, samples: usize, seed: Option<u64>) -> Vec<Sample> {
    let generator = match seed {
        Some(seed) => SyntheticGenerator::with_seed(seed),
        None => SyntheticGenerator::new(),
    };

    (0..samples)
        .map(|_| {
            let snapshot = generator.generate(provider);
            let evaluation = evaluate(provider, &MetricReadings::from(&snapshot));
            Sample {
                snapshot,
                recommendations: evaluation.recommendations(),
                status: evaluation.status,
            }
        })
        .collect()
}

/// Generate `samples` snapshots for a provider and evaluate each one
pub fn simulate(
    provider: Provider,
    samples: usize,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let results = run(provider, samples, seed);

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Table => {
            let mut tally = StatusTally::default();
            let rows: Vec<SampleRow> = results
                .iter()
                .enumerate()
                .map(|(i, sample)| {
                    tally.add(sample.status);
                    SampleRow {
                        index: i + 1,
                        cpu: format_percent(sample.snapshot.cpu),
                        mem: format_percent(sample.snapshot.mem),
                        disk: format_percent(sample.snapshot.disk),
                        network: format_percent(sample.snapshot.network),
                        workload: workload_summary(&sample.snapshot.workload),
                        advice: sample.recommendations.len(),
                        status: color_status(sample.status),
                    }
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            print_info(&format!(
                "{} samples for {}: {} normal, {} warning, {} critical",
                samples,
                provider.label(),
                tally.normal,
                tally.warning,
                tally.critical
            ));
        }
    }

    Ok(())
}
