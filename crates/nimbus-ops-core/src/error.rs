//! Error types and error handling for Nimbus Ops

use thiserror::Error;

/// Result type alias using OpsError
pub type Result<T> = std::result::Result<T, OpsError>;

/// Custom error types for Nimbus Ops operations
#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("AWS error: {0}")]
    Aws(String),

    #[error("Malformed queue URL: {0}")]
    MalformedQueueUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("General error: {0}")]
    General(#[from] anyhow::Error),
}

/// Handle and display errors with helpful messages
pub fn handle_error(error: &OpsError) {
    eprintln!("✗ Error: {}", error);

    // If DEBUG environment variable is set, show detailed info
    if std::env::var("DEBUG").is_ok() {
        if let Some(source) = std::error::Error::source(error) {
            eprintln!("\nDetails:");
            eprintln!("{:?}", source);
        }
    }

    // Provide helpful tips
    match error {
        OpsError::Aws(_) => {
            eprintln!("\nHints:");
            eprintln!("  • Check credentials: ls -la ~/.aws/credentials");
            eprintln!("  • Check the default region: cat ~/.aws/config");
            eprintln!("  • Pass --region to override the region");
        }
        OpsError::Configuration(_) => {
            eprintln!("\nHints:");
            eprintln!("  • Check that the config file exists and is valid JSON");
            eprintln!(
                "  • Recognized fields: QueueName, DlQueueName, InstanceName, InstanceID, AlarmName"
            );
        }
        OpsError::MalformedQueueUrl(_) => {
            eprintln!("\nHints:");
            eprintln!("  • Queue URLs look like https://sqs.REGION.amazonaws.com/ACCOUNT-ID/QUEUE-NAME");
        }
        _ => {}
    }
}
