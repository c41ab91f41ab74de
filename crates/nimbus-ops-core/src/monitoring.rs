//! CloudWatch monitoring client
//!
//! Provides functionality to:
//! - Publish custom metric data points
//! - Create, enable, disable and delete metric alarms
//! - List configured alarms
//! - Look up an EC2 instance to attach an alarm to

use serde::{Deserialize, Serialize};
use tracing::info;

use aws_sdk_cloudwatch::types::{ComparisonOperator, Dimension, MetricDatum, StandardUnit, Statistic};

use crate::error::{OpsError, Result};

/// Summary row for a configured alarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmSummary {
    pub name: String,
    pub state: String,
    pub metric: String,
    pub namespace: String,
    pub threshold: Option<f64>,
    pub comparison: String,
}

/// Monitoring client for CloudWatch metrics and alarms
#[derive(Clone)]
pub struct MonitoringClient {
    region: String,
    cloudwatch: aws_sdk_cloudwatch::Client,
    ec2: aws_sdk_ec2::Client,
    sts: aws_sdk_sts::Client,
}

fn cw_err(e: impl Into<aws_sdk_cloudwatch::Error>) -> OpsError {
    OpsError::Aws(e.into().to_string())
}

impl MonitoringClient {
    /// Create a new monitoring client.
    ///
    /// Credentials and the default region come from the ambient environment
    /// (`~/.aws/credentials`, `~/.aws/config`, environment variables);
    /// `region` overrides the region only.
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;

        Self {
            region: config.region().map(|r| r.to_string()).unwrap_or_default(),
            cloudwatch: aws_sdk_cloudwatch::Client::new(&config),
            ec2: aws_sdk_ec2::Client::new(&config),
            sts: aws_sdk_sts::Client::new(&config),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Publish a single metric data point with one dimension.
    ///
    /// `unit` is a CloudWatch standard unit name such as `Seconds` or
    /// `Megabytes`; the service rejects values it does not recognize.
    pub async fn put_metric(
        &self,
        namespace: &str,
        metric_name: &str,
        unit: &str,
        value: f64,
        dimension_name: &str,
        dimension_value: &str,
    ) -> Result<()> {
        let dimension = Dimension::builder()
            .name(dimension_name)
            .value(dimension_value)
            .build();

        let datum = MetricDatum::builder()
            .metric_name(metric_name)
            .unit(StandardUnit::from(unit))
            .value(value)
            .dimensions(dimension)
            .build();

        self.cloudwatch
            .put_metric_data()
            .namespace(namespace)
            .metric_data(datum)
            .send()
            .await
            .map_err(cw_err)?;

        info!("Published {} = {} to {}", metric_name, value, namespace);
        Ok(())
    }

    /// Create an alarm that fires when an instance's CPU utilization stays
    /// above `threshold` percent, with `action_arn` as the alarm action.
    ///
    /// The alarm watches `CPUUtilization` in `AWS/EC2` with a 60 second
    /// period, a single evaluation period and the Average statistic.
    pub async fn create_cpu_alarm(
        &self,
        alarm_name: &str,
        instance_id: &str,
        threshold: f64,
        action_arn: &str,
    ) -> Result<()> {
        let dimension = Dimension::builder()
            .name("InstanceId")
            .value(instance_id)
            .build();

        self.cloudwatch
            .put_metric_alarm()
            .alarm_name(alarm_name)
            .comparison_operator(ComparisonOperator::GreaterThanThreshold)
            .evaluation_periods(1)
            .metric_name("CPUUtilization")
            .namespace("AWS/EC2")
            .period(60)
            .statistic(Statistic::Average)
            .threshold(threshold)
            .actions_enabled(true)
            .alarm_description(format!("Alarm when server CPU exceeds {}%", threshold))
            .alarm_actions(action_arn)
            .dimensions(dimension)
            .send()
            .await
            .map_err(cw_err)?;

        info!("Created alarm {} for instance {}", alarm_name, instance_id);
        Ok(())
    }

    /// Enable the actions of an existing alarm
    pub async fn enable_alarm_actions(&self, alarm_name: &str) -> Result<()> {
        self.cloudwatch
            .enable_alarm_actions()
            .alarm_names(alarm_name)
            .send()
            .await
            .map_err(cw_err)?;
        Ok(())
    }

    /// Disable the actions of an existing alarm
    pub async fn disable_alarm_actions(&self, alarm_name: &str) -> Result<()> {
        self.cloudwatch
            .disable_alarm_actions()
            .alarm_names(alarm_name)
            .send()
            .await
            .map_err(cw_err)?;
        Ok(())
    }

    /// Delete an alarm
    pub async fn delete_alarm(&self, alarm_name: &str) -> Result<()> {
        self.cloudwatch
            .delete_alarms()
            .alarm_names(alarm_name)
            .send()
            .await
            .map_err(cw_err)?;

        info!("Deleted alarm {}", alarm_name);
        Ok(())
    }

    /// List all metric alarms in the region
    pub async fn list_alarms(&self) -> Result<Vec<AlarmSummary>> {
        let response = self
            .cloudwatch
            .describe_alarms()
            .send()
            .await
            .map_err(cw_err)?;

        let alarms = response
            .metric_alarms()
            .iter()
            .map(|alarm| AlarmSummary {
                name: alarm.alarm_name().unwrap_or_default().to_string(),
                state: alarm
                    .state_value()
                    .map(|s| s.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                metric: alarm.metric_name().unwrap_or_default().to_string(),
                namespace: alarm.namespace().unwrap_or_default().to_string(),
                threshold: alarm.threshold(),
                comparison: alarm
                    .comparison_operator()
                    .map(|c| c.as_str())
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        Ok(alarms)
    }

    /// Account ID of the current caller
    pub async fn account_id(&self) -> Result<String> {
        let identity = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| OpsError::Aws(aws_sdk_sts::Error::from(e).to_string()))?;

        identity
            .account()
            .map(str::to_string)
            .ok_or_else(|| OpsError::Aws("caller identity has no account ID".to_string()))
    }

    /// Find the first EC2 instance that has both an ID and a `Name` tag.
    ///
    /// Returns `(instance_id, name)`. Used by test bootstrap when the config
    /// file does not name an instance.
    pub async fn find_named_instance(&self) -> Result<(String, String)> {
        let response = self
            .ec2
            .describe_instances()
            .send()
            .await
            .map_err(|e| OpsError::Aws(aws_sdk_ec2::Error::from(e).to_string()))?;

        for reservation in response.reservations() {
            for instance in reservation.instances() {
                let id = instance.instance_id().unwrap_or_default();
                let name = instance
                    .tags()
                    .iter()
                    .find(|t| t.key() == Some("Name"))
                    .and_then(|t| t.value())
                    .unwrap_or_default();

                if !id.is_empty() && !name.is_empty() {
                    return Ok((id.to_string(), name.to_string()));
                }
            }
        }

        Err(OpsError::Validation(
            "no EC2 instance found with both an ID and a Name tag".to_string(),
        ))
    }
}
