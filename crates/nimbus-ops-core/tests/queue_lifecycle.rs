//! Dead-letter queue lifecycle against live SQS.
//!
//! Creates a queue and a dead-letter queue, wires the redrive policy, and
//! deletes both. Needs AWS credentials, so it is ignored by default:
//!
//! ```text
//! NIMBUS_OPS_TEST_CONFIG=tests/config.json cargo test -- --ignored
//! ```

use nimbus_ops_core::{
    queue_arn_from_url, MonitoringClient, QueueClient, ResourceConfig, ResourceStack, Result,
};

fn load_config() -> Result<ResourceConfig> {
    match std::env::var("NIMBUS_OPS_TEST_CONFIG") {
        Ok(path) => ResourceConfig::load(path),
        Err(_) => Ok(ResourceConfig::default()),
    }
}

#[tokio::test]
#[ignore = "requires AWS credentials and creates real queues"]
async fn configures_dead_letter_queue() -> Result<()> {
    let mut config = load_config()?;
    let queue_name = config.queue_name_or_default("myqueue");
    let dl_queue_name = config.dl_queue_name_or_default("mydlqueue");

    let queues = QueueClient::new(None).await;
    let monitoring = MonitoringClient::new(None).await;

    let mut stack = ResourceStack::new();
    let queue_url = stack.create_queue(&queues, &queue_name).await?;
    let dl_queue_url = stack.create_queue(&queues, &dl_queue_name).await?;

    // The operation under test; teardown runs whether or not it succeeds
    let outcome = match queue_arn_from_url(&dl_queue_url) {
        Ok(dl_arn) => queues.configure_dead_letter(&queue_url, &dl_arn, 10).await,
        Err(e) => Err(e),
    };

    let teardown = stack.teardown(&queues, &monitoring).await;

    outcome?;
    teardown
}
