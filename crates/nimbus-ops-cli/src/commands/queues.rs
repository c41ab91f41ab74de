//! Queues command - queue lifecycle and dead-letter wiring

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use nimbus_ops_core::{queue_arn_from_url, QueueClient};

#[derive(Args)]
pub struct QueuesCommand {
    #[command(subcommand)]
    command: QueuesSubcommand,
}

#[derive(Subcommand)]
enum QueuesSubcommand {
    /// Create a queue
    Create(NamedQueueCommand),

    /// Look up the URL of a queue
    Url(NamedQueueCommand),

    /// Point a queue's redrive policy at a dead-letter queue
    SetDlq(SetDlqCommand),

    /// Delete a queue
    Delete(QueueUrlCommand),

    /// Derive a queue's ARN from its URL (no network call)
    Arn(QueueUrlCommand),

    /// List all queues
    List(ListCommand),
}

#[derive(Args)]
struct NamedQueueCommand {
    /// The name of the queue
    #[arg(short, long)]
    name: String,
}

#[derive(Args)]
struct QueueUrlCommand {
    /// The URL of the queue
    #[arg(short = 'u', long)]
    queue_url: String,
}

#[derive(Args)]
struct SetDlqCommand {
    /// The URL of the queue that failed to deliver messages
    #[arg(short = 'u', long)]
    queue_url: String,

    /// The ARN of the dead-letter queue
    #[arg(short = 'd', long)]
    dl_queue_arn: String,

    /// Delivery attempts before a message moves to the dead-letter queue
    #[arg(long, default_value_t = 10)]
    max_receive_count: u32,
}

#[derive(Args)]
struct ListCommand;

impl QueuesCommand {
    pub async fn execute(&self, region: Option<String>, json: bool) -> Result<()> {
        // ARN derivation is local, no client needed
        if let QueuesSubcommand::Arn(cmd) = &self.command {
            let arn = queue_arn_from_url(&cmd.queue_url)?;
            println!("{}", arn);
            return Ok(());
        }

        let queues = QueueClient::new(region).await;

        match &self.command {
            QueuesSubcommand::Create(cmd) => {
                let url = queues.create_queue(&cmd.name).await?;
                println!("{} Created queue {}", "✓".green(), cmd.name.bold());
                println!("  URL: {}", url);
                Ok(())
            }
            QueuesSubcommand::Url(cmd) => {
                let url = queues.queue_url(&cmd.name).await?;
                println!("URL for queue {}: {}", cmd.name.bold(), url);
                Ok(())
            }
            QueuesSubcommand::SetDlq(cmd) => {
                queues
                    .configure_dead_letter(
                        &cmd.queue_url,
                        &cmd.dl_queue_arn,
                        cmd.max_receive_count,
                    )
                    .await?;
                println!(
                    "{} Configured dead-letter queue for {}",
                    "✓".green(),
                    cmd.queue_url
                );
                Ok(())
            }
            QueuesSubcommand::Delete(cmd) => {
                queues.delete_queue(&cmd.queue_url).await?;
                println!("{} Deleted queue {}", "✓".green(), cmd.queue_url);
                Ok(())
            }
            QueuesSubcommand::List(cmd) => cmd.execute(&queues, json).await,
            QueuesSubcommand::Arn(_) => unreachable!("handled above"),
        }
    }
}

impl ListCommand {
    async fn execute(&self, queues: &QueueClient, json: bool) -> Result<()> {
        let urls = queues.list_queues().await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&urls)?);
            return Ok(());
        }

        if urls.is_empty() {
            println!("{}", "No queues found".yellow());
            return Ok(());
        }

        for url in &urls {
            println!("{}", url);
        }
        println!();
        println!("{} queues total", urls.len());

        Ok(())
    }
}
