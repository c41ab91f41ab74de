//! Queue URL lookup against live SQS.
//!
//! Asks SQS for a queue's URL and checks the answer against the URL the
//! documented pattern predicts for this account and region. A queue named
//! in the config file is treated as pre-existing and reused as-is; only a
//! queue with a generated name is created, and only that queue is torn
//! down.

use nimbus_ops_core::{MonitoringClient, QueueClient, ResourceConfig, ResourceStack, Result};

fn load_config() -> Result<ResourceConfig> {
    match std::env::var("NIMBUS_OPS_TEST_CONFIG") {
        Ok(path) => ResourceConfig::load(path),
        Err(_) => Ok(ResourceConfig::default()),
    }
}

#[tokio::test]
#[ignore = "requires AWS credentials and may create a real queue"]
async fn looks_up_queue_url() -> Result<()> {
    let mut config = load_config()?;
    let reuse_existing = config.has_queue_name();
    let queue_name = config.queue_name_or_default("myqueue");

    let queues = QueueClient::new(None).await;
    let monitoring = MonitoringClient::new(None).await;

    // Only a queue we named ourselves gets created and torn down
    let mut stack = ResourceStack::new();
    if !reuse_existing {
        stack.create_queue(&queues, &queue_name).await?;
    }

    let outcome = async {
        let url = queues.queue_url(&queue_name).await?;
        let expected = queues.expected_queue_url(&queue_name).await?;
        assert_eq!(url, expected);
        Ok(())
    }
    .await;

    let teardown = stack.teardown(&queues, &monitoring).await;

    outcome?;
    teardown
}
