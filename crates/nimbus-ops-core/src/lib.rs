//! nimbus-ops-core - Core shared library for the Nimbus Ops CLI
//!
//! This crate provides shared functionality for:
//! - CloudWatch metric publishing and alarm lifecycle
//! - SQS queue lifecycle and dead-letter wiring
//! - Queue ARN derivation
//! - Test bootstrap configuration and resource cleanup
//! - Error handling

pub mod arn;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod monitoring;
pub mod queues;

// Re-exports for convenience
pub use arn::{queue_arn_from_url, reboot_action_arn};
pub use config::{unique_suffix, ResourceConfig};
pub use error::{handle_error, OpsError, Result};
pub use lifecycle::{Resource, ResourceStack};
pub use monitoring::{AlarmSummary, MonitoringClient};
pub use queues::QueueClient;
