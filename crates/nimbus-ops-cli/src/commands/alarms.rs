//! Alarms command - metric alarm lifecycle

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use nimbus_ops_core::{reboot_action_arn, MonitoringClient};

#[derive(Args)]
pub struct AlarmsCommand {
    #[command(subcommand)]
    command: AlarmsSubcommand,
}

#[derive(Subcommand)]
enum AlarmsSubcommand {
    /// Create a CPU utilization alarm for an EC2 instance
    Create(CreateCommand),

    /// Enable the actions of an alarm
    Enable(NamedAlarmCommand),

    /// Disable the actions of an alarm
    Disable(NamedAlarmCommand),

    /// Delete an alarm
    Delete(NamedAlarmCommand),

    /// List all metric alarms
    List(ListCommand),
}

#[derive(Args)]
struct CreateCommand {
    /// The name of the alarm
    #[arg(short, long)]
    name: String,

    /// The ID of the instance to watch
    #[arg(short, long)]
    instance_id: String,

    /// CPU utilization percentage that triggers the alarm
    #[arg(short, long, default_value_t = 70.0)]
    threshold: f64,

    /// Action ARN to invoke when the alarm fires; defaults to the
    /// instance-reboot action for the current account and region
    #[arg(long)]
    action_arn: Option<String>,
}

#[derive(Args)]
struct NamedAlarmCommand {
    /// The name of the alarm
    #[arg(short, long)]
    name: String,
}

#[derive(Args)]
struct ListCommand;

impl AlarmsCommand {
    pub async fn execute(&self, region: Option<String>, json: bool) -> Result<()> {
        let monitoring = MonitoringClient::new(region).await;

        match &self.command {
            AlarmsSubcommand::Create(cmd) => cmd.execute(&monitoring).await,
            AlarmsSubcommand::Enable(cmd) => {
                monitoring.enable_alarm_actions(&cmd.name).await?;
                println!("{} Enabled alarm {}", "✓".green(), cmd.name.bold());
                Ok(())
            }
            AlarmsSubcommand::Disable(cmd) => {
                monitoring.disable_alarm_actions(&cmd.name).await?;
                println!("{} Disabled alarm {}", "✓".green(), cmd.name.bold());
                Ok(())
            }
            AlarmsSubcommand::Delete(cmd) => {
                monitoring.delete_alarm(&cmd.name).await?;
                println!("{} Deleted alarm {}", "✓".green(), cmd.name.bold());
                Ok(())
            }
            AlarmsSubcommand::List(cmd) => cmd.execute(&monitoring, json).await,
        }
    }
}

impl CreateCommand {
    async fn execute(&self, monitoring: &MonitoringClient) -> Result<()> {
        let action_arn = match &self.action_arn {
            Some(arn) => arn.clone(),
            None => {
                let account_id = monitoring.account_id().await?;
                reboot_action_arn(monitoring.region(), &account_id)
            }
        };

        monitoring
            .create_cpu_alarm(&self.name, &self.instance_id, self.threshold, &action_arn)
            .await?;

        println!(
            "{} Created alarm {} for instance {} (CPU > {}%)",
            "✓".green(),
            self.name.bold(),
            self.instance_id,
            self.threshold
        );

        Ok(())
    }
}

impl ListCommand {
    async fn execute(&self, monitoring: &MonitoringClient, json: bool) -> Result<()> {
        let alarms = monitoring.list_alarms().await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&alarms)?);
            return Ok(());
        }

        if alarms.is_empty() {
            println!("{}", "No alarms configured".yellow());
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Alarm", "State", "Metric", "Namespace", "Threshold"]);

        for alarm in &alarms {
            let state_color = match alarm.state.as_str() {
                "OK" => Color::Green,
                "ALARM" => Color::Red,
                _ => Color::Yellow,
            };
            table.add_row(vec![
                Cell::new(&alarm.name),
                Cell::new(&alarm.state).fg(state_color),
                Cell::new(format!("{} {}", alarm.metric, alarm.comparison)),
                Cell::new(&alarm.namespace),
                Cell::new(
                    alarm
                        .threshold
                        .map(|t| t.to_string())
                        .unwrap_or_default(),
                ),
            ]);
        }

        println!("{table}");
        println!();
        println!("{} alarms total", alarms.len());

        Ok(())
    }
}
