//! Test resource lifecycle
//!
//! Integration tests create real queues and alarms, run the operation under
//! test, and must clean up after themselves. `ResourceStack` records every
//! resource as it is created and tears all of them down in reverse creation
//! order. Teardown is best-effort: every recorded resource gets exactly one
//! deletion attempt, failures are logged with a remediation hint, and the
//! first failure is reported after all attempts finish so the test still
//! fails.

use tracing::warn;

use crate::error::Result;
use crate::monitoring::MonitoringClient;
use crate::queues::QueueClient;

/// A cloud resource owned by a test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Queue { name: String, url: String },
    Alarm { name: String },
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Queue { name, .. } => name,
            Resource::Alarm { name } => name,
        }
    }
}

/// Records created resources and releases them on teardown
#[derive(Debug, Default)]
pub struct ResourceStack {
    resources: Vec<Resource>,
}

impl ResourceStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources currently held, in creation order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The order teardown will release resources in: reverse of creation,
    /// each resource exactly once
    pub fn teardown_plan(&self) -> Vec<&Resource> {
        self.resources.iter().rev().collect()
    }

    /// Create a queue and record it for teardown
    pub async fn create_queue(&mut self, queues: &QueueClient, name: &str) -> Result<String> {
        let url = queues.create_queue(name).await?;
        self.resources.push(Resource::Queue {
            name: name.to_string(),
            url: url.clone(),
        });
        Ok(url)
    }

    /// Create an alarm, enable its actions, and record it for teardown
    pub async fn create_cpu_alarm(
        &mut self,
        monitoring: &MonitoringClient,
        alarm_name: &str,
        instance_id: &str,
        threshold: f64,
        action_arn: &str,
    ) -> Result<()> {
        monitoring
            .create_cpu_alarm(alarm_name, instance_id, threshold, action_arn)
            .await?;
        self.resources.push(Resource::Alarm {
            name: alarm_name.to_string(),
        });

        monitoring.enable_alarm_actions(alarm_name).await?;
        Ok(())
    }

    /// Release every recorded resource, newest first.
    ///
    /// Failures do not stop the remaining deletions; the first error is
    /// returned once everything has been attempted.
    pub async fn teardown(
        mut self,
        queues: &QueueClient,
        monitoring: &MonitoringClient,
    ) -> Result<()> {
        let mut first_error = None;

        for resource in self.resources.drain(..).rev() {
            let outcome = match &resource {
                Resource::Queue { url, .. } => queues.delete_queue(url).await,
                Resource::Alarm { name } => monitoring.delete_alarm(name).await,
            };

            if let Err(e) = outcome {
                let kind = match &resource {
                    Resource::Queue { .. } => "queue",
                    Resource::Alarm { .. } => "alarm",
                };
                warn!(
                    "Failed to delete {} {} ({}); you'll have to delete it yourself",
                    kind,
                    resource.name(),
                    e
                );
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with(resources: Vec<Resource>) -> ResourceStack {
        ResourceStack { resources }
    }

    #[test]
    fn test_teardown_plan_reverses_creation_order() {
        let stack = stack_with(vec![
            Resource::Queue {
                name: "q1".to_string(),
                url: "https://sqs.us-west-2.amazonaws.com/123456789012/q1".to_string(),
            },
            Resource::Queue {
                name: "dlq1".to_string(),
                url: "https://sqs.us-west-2.amazonaws.com/123456789012/dlq1".to_string(),
            },
            Resource::Alarm {
                name: "Alarm70-x".to_string(),
            },
        ]);

        let plan: Vec<&str> = stack.teardown_plan().iter().map(|r| r.name()).collect();
        assert_eq!(plan, vec!["Alarm70-x", "dlq1", "q1"]);
    }

    #[test]
    fn test_teardown_plan_targets_each_resource_once() {
        let stack = stack_with(vec![
            Resource::Queue {
                name: "a".to_string(),
                url: "https://sqs.us-west-2.amazonaws.com/123456789012/a".to_string(),
            },
            Resource::Alarm {
                name: "b".to_string(),
            },
        ]);

        let plan = stack.teardown_plan();
        assert_eq!(plan.len(), stack.resources().len());
        for resource in stack.resources() {
            assert_eq!(plan.iter().filter(|r| **r == *resource).count(), 1);
        }
    }

    #[test]
    fn test_empty_stack_has_empty_plan() {
        let stack = ResourceStack::new();
        assert!(stack.teardown_plan().is_empty());
    }
}
