//! ARN construction helpers
//!
//! SQS does not return a queue's ARN from CreateQueue, so the tests derive
//! it from the queue URL. The URL shape is validated explicitly; a URL that
//! does not look like `https://sqs.REGION.amazonaws.com/ACCOUNT-ID/NAME`
//! yields an error rather than a garbage ARN.

use crate::error::{OpsError, Result};

/// Derive a queue ARN from its URL.
///
/// `https://sqs.us-west-2.amazonaws.com/123456789012/jobs` becomes
/// `arn:aws:sqs:us-west-2:123456789012:jobs`.
///
/// Note: the `arn:aws:` partition literal assumes the standard partition;
/// URLs from other partitions (e.g. GovCloud) are not recognized.
pub fn queue_arn_from_url(queue_url: &str) -> Result<String> {
    let malformed = || OpsError::MalformedQueueUrl(queue_url.to_string());

    let rest = queue_url
        .strip_prefix("https://")
        .or_else(|| queue_url.strip_prefix("http://"))
        .ok_or_else(malformed)?;

    // host / account-id / queue-name, nothing more
    let mut segments = rest.split('/');
    let host = segments.next().ok_or_else(malformed)?;
    let account_id = segments.next().ok_or_else(malformed)?;
    let queue_name = segments.next().ok_or_else(malformed)?;
    if segments.next().is_some() || account_id.is_empty() || queue_name.is_empty() {
        return Err(malformed());
    }

    // sqs.REGION.amazonaws.com
    let mut host_parts = host.split('.');
    let service = host_parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let region = host_parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    if host_parts.next().is_none() {
        return Err(malformed());
    }

    Ok(format!(
        "arn:aws:{}:{}:{}:{}",
        service, region, account_id, queue_name
    ))
}

/// Build the SWF action ARN that reboots an EC2 instance when an alarm fires
pub fn reboot_action_arn(region: &str, account_id: &str) -> String {
    format!(
        "arn:aws:swf:{}:{}:action/actions/AWS_EC2.InstanceId.Reboot/1.0",
        region, account_id
    )
}
