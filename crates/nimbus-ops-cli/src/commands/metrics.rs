//! Metrics command - publish custom metric data

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use nimbus_ops_core::MonitoringClient;

#[derive(Args)]
pub struct MetricsCommand {
    #[command(subcommand)]
    command: MetricsSubcommand,
}

#[derive(Subcommand)]
enum MetricsSubcommand {
    /// Publish a single metric data point
    Put(PutCommand),
}

#[derive(Args)]
struct PutCommand {
    /// The namespace for the metric
    #[arg(short, long)]
    namespace: String,

    /// The name of the metric
    #[arg(short, long)]
    metric_name: String,

    /// The unit for the metric, e.g. Seconds or Megabytes
    #[arg(short, long)]
    unit: String,

    /// The value of the metric
    #[arg(short, long)]
    value: f64,

    /// The name of the dimension
    #[arg(long)]
    dimension_name: String,

    /// The value of the dimension
    #[arg(long)]
    dimension_value: String,
}

impl MetricsCommand {
    pub async fn execute(&self, region: Option<String>) -> Result<()> {
        match &self.command {
            MetricsSubcommand::Put(cmd) => cmd.execute(region).await,
        }
    }
}

impl PutCommand {
    async fn execute(&self, region: Option<String>) -> Result<()> {
        let monitoring = MonitoringClient::new(region).await;

        monitoring
            .put_metric(
                &self.namespace,
                &self.metric_name,
                &self.unit,
                self.value,
                &self.dimension_name,
                &self.dimension_value,
            )
            .await?;

        println!(
            "{} Published {} = {} {} to namespace {}",
            "✓".green(),
            self.metric_name.bold(),
            self.value,
            self.unit,
            self.namespace
        );

        Ok(())
    }
}
