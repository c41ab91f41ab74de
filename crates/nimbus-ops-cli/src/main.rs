//! Nimbus Ops CLI - Command-line interface for CloudWatch and SQS operations
//!
//! This CLI provides tools for:
//! - Publishing custom metric data
//! - Managing metric alarms
//! - Managing queues and dead-letter wiring

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

mod commands;

use commands::{alarms, metrics, queues, version};

#[derive(Parser)]
#[command(name = "nimbus-ops")]
#[command(author = "Nimbus Team")]
#[command(version)]
#[command(about = "Nimbus Ops CLI - CloudWatch and SQS operations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the AWS region
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Metric operations (put)
    Metrics(metrics::MetricsCommand),

    /// Alarm operations (create, enable, disable, delete, list)
    Alarms(alarms::AlarmsCommand),

    /// Queue operations (create, url, set-dlq, delete, list)
    Queues(queues::QueuesCommand),

    /// Show version information
    Version(version::VersionCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Execute command
    let result = match cli.command {
        Some(Commands::Metrics(cmd)) => cmd.execute(cli.region.clone()).await,
        Some(Commands::Alarms(cmd)) => cmd.execute(cli.region.clone(), cli.json).await,
        Some(Commands::Queues(cmd)) => cmd.execute(cli.region.clone(), cli.json).await,
        Some(Commands::Version(cmd)) => cmd.execute(),
        None => {
            // Show help by default
            println!("{}", "Nimbus Ops CLI".bold());
            println!();
            println!("Use {} for help", "nimbus-ops --help".cyan());
            Ok(())
        }
    };

    if let Err(e) = result {
        nimbus_ops_core::handle_error(&unwrap_ops_error(e));
        std::process::exit(1);
    }

    Ok(())
}

// Commands bubble core errors up through anyhow; recover the concrete
// variant so handle_error can print its per-variant hints.
fn unwrap_ops_error(error: anyhow::Error) -> nimbus_ops_core::OpsError {
    match error.downcast::<nimbus_ops_core::OpsError>() {
        Ok(ops_error) => ops_error,
        Err(other) => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_ops_core::OpsError;

    #[test]
    fn test_unwrap_ops_error_recovers_variant() {
        let error = anyhow::Error::from(OpsError::MalformedQueueUrl("not-a-url".to_string()));
        assert!(matches!(
            unwrap_ops_error(error),
            OpsError::MalformedQueueUrl(_)
        ));

        let error = anyhow::Error::from(OpsError::Aws("access denied".to_string()));
        assert!(matches!(unwrap_ops_error(error), OpsError::Aws(_)));
    }

    #[test]
    fn test_unwrap_ops_error_wraps_foreign_errors() {
        let error = anyhow::anyhow!("something else");
        assert!(matches!(unwrap_ops_error(error), OpsError::General(_)));
    }
}
