//! Custom metric publishing against live CloudWatch.
//!
//! Publishes one data point to a throwaway namespace. Metrics expire on
//! their own, so there is nothing to tear down.

use nimbus_ops_core::{MonitoringClient, Result};

#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn publishes_custom_metric() -> Result<()> {
    let monitoring = MonitoringClient::new(None).await;

    monitoring
        .put_metric(
            "Site/Traffic",
            "UniqueVisitors",
            "Count",
            42.0,
            "SiteName",
            "example.com",
        )
        .await
}
