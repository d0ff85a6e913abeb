//! Cloud Tuning Dashboard CLI
//!
//! A command-line tool for fetching live metrics and tuning advice from a
//! running dashboard, evaluating hand-entered readings, and simulating the
//! metric generator offline.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{evaluate, metrics, simulate};
use dashboard_lib::Provider;

/// Cloud Tuning Dashboard CLI
#[derive(Parser)]
#[command(name = "tune")]
#[command(author, version, about = "CLI for the Cloud Tuning Dashboard", long_about = None)]
pub struct Cli {
    /// Dashboard URL (can also be set via TUNE_API_URL env var)
    #[arg(long, env = "TUNE_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one generated snapshot and its recommendations
    Metrics {
        /// Cloud provider (aws, azure, gcp)
        #[arg(long, short, default_value = "aws")]
        provider: String,
    },

    /// Poll metrics repeatedly
    Watch {
        /// Cloud provider (aws, azure, gcp)
        #[arg(long, short, default_value = "aws")]
        provider: String,

        /// Seconds between polls
        #[arg(long, short, default_value_t = 2)]
        interval: u64,

        /// Stop after this many snapshots
        #[arg(long, short)]
        count: Option<u32>,
    },

    /// Evaluate hand-entered metric readings
    Evaluate(EvaluateArgs),

    /// Check that the dashboard is up
    Ping,

    /// Run the generator and rules locally without a server
    Simulate {
        /// Cloud provider (aws, azure, gcp)
        #[arg(long, short, default_value = "aws")]
        provider: Provider,

        /// Number of snapshots to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        samples: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// Cloud provider; unknown names are passed through as-is
    #[arg(long, short, default_value = "aws")]
    pub provider: String,

    /// CPU utilization (%)
    #[arg(long)]
    pub cpu: Option<f64>,

    /// Memory utilization (%)
    #[arg(long)]
    pub mem: Option<f64>,

    /// Disk utilization (%)
    #[arg(long)]
    pub disk: Option<f64>,

    /// Network utilization (%)
    #[arg(long)]
    pub network: Option<f64>,

    /// AWS RDS latency (ms)
    #[arg(long)]
    pub db_latency: Option<f64>,

    /// AWS request count
    #[arg(long)]
    pub requests: Option<i64>,

    /// Azure request rate (req/s)
    #[arg(long)]
    pub request_rate: Option<f64>,

    /// Azure failure rate (%)
    #[arg(long)]
    pub failure_rate: Option<f64>,

    /// GCP queries per second
    #[arg(long)]
    pub qps: Option<i64>,

    /// GCP latency (ms)
    #[arg(long)]
    pub latency: Option<f64>,
}

impl From<EvaluateArgs> for client::ManualRequest {
    fn from(args: EvaluateArgs) -> Self {
        Self {
            provider: args.provider,
            cpu: args.cpu,
            mem: args.mem,
            disk: args.disk,
            network: args.network,
            db_latency: args.db_latency,
            requests: args.requests,
            request_rate: args.request_rate,
            failure_rate: args.failure_rate,
            qps: args.qps,
            latency: args.latency,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        output::print_info(&format!("Using dashboard at {}", cli.api_url));
    }

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    let result = match cli.command {
        Commands::Metrics { provider } => {
            metrics::show_metrics(&client, &provider, cli.format).await
        }
        Commands::Watch {
            provider,
            interval,
            count,
        } => metrics::watch_metrics(&client, &provider, interval, count, cli.format).await,
        Commands::Evaluate(args) => {
            evaluate::evaluate(&client, &args.into(), cli.format).await
        }
        Commands::Ping => metrics::ping(&client, cli.format).await,
        Commands::Simulate {
            provider,
            samples,
            seed,
        } => simulate::simulate(provider, samples, seed, cli.format),
    };

    if let Err(err) = result {
        output::print_error(&format!("{:#}", err));
        std::process::exit(1);
    }

    Ok(())
}
