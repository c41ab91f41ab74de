//! CLI command modules

pub mod alarms;
pub mod metrics;
pub mod queues;
pub mod version;
