//! SQS queue client
//!
//! Thin wrappers over the queue lifecycle calls: create, look up, delete,
//! and dead-letter wiring via the queue's redrive policy.

use tracing::info;

use aws_sdk_sqs::types::QueueAttributeName;

use crate::error::{OpsError, Result};

/// Queue client for SQS operations
#[derive(Clone)]
pub struct QueueClient {
    region: String,
    sqs: aws_sdk_sqs::Client,
    sts: aws_sdk_sts::Client,
}

fn sqs_err(e: impl Into<aws_sdk_sqs::Error>) -> OpsError {
    OpsError::Aws(e.into().to_string())
}

impl QueueClient {
    /// Create a new queue client.
    ///
    /// Credentials and the default region come from the ambient environment;
    /// `region` overrides the region only.
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;

        Self {
            region: config.region().map(|r| r.to_string()).unwrap_or_default(),
            sqs: aws_sdk_sqs::Client::new(&config),
            sts: aws_sdk_sts::Client::new(&config),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Create a queue and return its URL.
    ///
    /// Messages are delayed 60 seconds and retained for one day, matching
    /// the settings the integration tests expect.
    pub async fn create_queue(&self, queue_name: &str) -> Result<String> {
        let response = self
            .sqs
            .create_queue()
            .queue_name(queue_name)
            .attributes(QueueAttributeName::DelaySeconds, "60")
            .attributes(QueueAttributeName::MessageRetentionPeriod, "86400")
            .send()
            .await
            .map_err(sqs_err)?;

        let url = response
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| OpsError::Aws("CreateQueue response has no queue URL".to_string()))?;

        info!("Created queue {} at {}", queue_name, url);
        Ok(url)
    }

    /// Look up the URL of an existing queue by name
    pub async fn queue_url(&self, queue_name: &str) -> Result<String> {
        let response = self
            .sqs
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(sqs_err)?;

        response
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| OpsError::Aws("GetQueueUrl response has no queue URL".to_string()))
    }

    /// Delete a queue by URL
    pub async fn delete_queue(&self, queue_url: &str) -> Result<()> {
        self.sqs
            .delete_queue()
            .queue_url(queue_url)
            .send()
            .await
            .map_err(sqs_err)?;

        info!("Deleted queue {}", queue_url);
        Ok(())
    }

    /// Point a queue's redrive policy at a dead-letter queue.
    ///
    /// Messages that fail delivery `max_receive_count` times are moved to
    /// the queue identified by `dl_queue_arn`.
    pub async fn configure_dead_letter(
        &self,
        queue_url: &str,
        dl_queue_arn: &str,
        max_receive_count: u32,
    ) -> Result<()> {
        let policy = serde_json::json!({
            "deadLetterTargetArn": dl_queue_arn,
            "maxReceiveCount": max_receive_count.to_string(),
        });

        self.sqs
            .set_queue_attributes()
            .queue_url(queue_url)
            .attributes(QueueAttributeName::RedrivePolicy, policy.to_string())
            .send()
            .await
            .map_err(sqs_err)?;

        info!(
            "Configured dead-letter queue {} for {}",
            dl_queue_arn, queue_url
        );
        Ok(())
    }

    /// List the URLs of all queues in the region
    pub async fn list_queues(&self) -> Result<Vec<String>> {
        let response = self.sqs.list_queues().send().await.map_err(sqs_err)?;
        Ok(response.queue_urls().to_vec())
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

    /// Build the URL a queue with this name would have in this account,
    /// without asking SQS. Follows the documented URL pattern.
    pub async fn expected_queue_url(&self, queue_name: &str) -> Result<String> {
        let account_id = self.account_id().await?;
        Ok(format!(
            "https://sqs.{}.amazonaws.com/{}/{}",
            self.region, account_id, queue_name
        ))
    }
}
