//! Test bootstrap configuration
//!
//! Integration tests read resource names from a small JSON file so they can
//! run against pre-existing resources. Any field left blank gets a unique
//! generated name, which keeps repeated runs from colliding.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::{OpsError, Result};

/// Resource names consumed by the test bootstrap.
///
/// Field names match the JSON file, e.g.
/// `{"QueueName": "q1", "DlQueueName": "dlq1"}`. Every field is optional;
/// blank or absent fields are filled with generated defaults on first access.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceConfig {
    #[serde(rename = "QueueName", default)]
    pub queue_name: Option<String>,

    #[serde(rename = "DlQueueName", default)]
    pub dl_queue_name: Option<String>,

    #[serde(rename = "InstanceName", default)]
    pub instance_name: Option<String>,

    #[serde(rename = "InstanceID", default)]
    pub instance_id: Option<String>,

    #[serde(rename = "AlarmName", default)]
    pub alarm_name: Option<String>,
}

/// Generate a globally unique name suffix
pub fn unique_suffix() -> String {
    Uuid::new_v4().to_string()
}

impl ResourceConfig {
    /// Load configuration from a JSON file.
    ///
    /// A read or parse failure is fatal to the caller; no resources have
    /// been created at that point.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| OpsError::Configuration(format!("failed to parse config: {}", e)))
    }

    /// Queue name from the config, or a generated `<prefix>-<uuid>` default
    pub fn queue_name_or_default(&mut self, prefix: &str) -> String {
        Self::name_or_generated(&mut self.queue_name, prefix)
    }

    /// Dead-letter queue name from the config, or a generated default
    pub fn dl_queue_name_or_default(&mut self, prefix: &str) -> String {
        Self::name_or_generated(&mut self.dl_queue_name, prefix)
    }

    /// Alarm name from the config, or a generated default
    pub fn alarm_name_or_default(&mut self, prefix: &str) -> String {
        Self::name_or_generated(&mut self.alarm_name, prefix)
    }

    /// Whether the config names a queue (non-blank `QueueName`).
    ///
    /// A named queue is treated as pre-existing: the caller reuses it and
    /// must not create or delete it.
    pub fn has_queue_name(&self) -> bool {
        !Self::is_blank(&self.queue_name)
    }

    /// Whether both instance fields are present and non-blank
    pub fn has_instance(&self) -> bool {
        !Self::is_blank(&self.instance_name) && !Self::is_blank(&self.instance_id)
    }

    /// Store an instance name and ID looked up from the environment
    pub fn set_instance(&mut self, name: String, id: String) {
        self.instance_name = Some(name);
        self.instance_id = Some(id);
    }

    // Blank strings in the file count as absent, same as a missing key.
    fn is_blank(field: &Option<String>) -> bool {
        field.as_deref().map(str::trim).unwrap_or("").is_empty()
    }

    fn name_or_generated(field: &mut Option<String>, prefix: &str) -> String {
        if Self::is_blank(field) {
            *field = Some(format!("{}-{}", prefix, unique_suffix()));
        }
        field.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_suffix_is_unique() {
        let a = unique_suffix();
        let b = unique_suffix();
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_configured_names_used_verbatim() {
        let mut config =
            ResourceConfig::from_json(r#"{"QueueName":"q1","DlQueueName":"dlq1"}"#).unwrap();
        assert_eq!(config.queue_name_or_default("myqueue"), "q1");
        assert_eq!(config.dl_queue_name_or_default("mydlqueue"), "dlq1");
    }

    #[test]
    fn test_missing_names_are_generated() {
        let mut config = ResourceConfig::from_json("{}").unwrap();
        let name = config.queue_name_or_default("myqueue");
        assert!(name.starts_with("myqueue-"));
        assert!(name.len() > "myqueue-".len());

        // Stable once generated
        assert_eq!(config.queue_name_or_default("myqueue"), name);
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let mut config = ResourceConfig::from_json(r#"{"AlarmName":""}"#).unwrap();
        let name = config.alarm_name_or_default("Alarm70");
        assert!(name.starts_with("Alarm70-"));
    }

    #[test]
    fn test_generated_names_do_not_collide() {
        let mut first = ResourceConfig::default();
        let mut second = ResourceConfig::default();
        assert_ne!(
            first.queue_name_or_default("myqueue"),
            second.queue_name_or_default("myqueue")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = ResourceConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, OpsError::Configuration(_)));
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let err = ResourceConfig::load("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, OpsError::Io(_)));
    }

    #[test]
    fn test_has_queue_name_distinguishes_preexisting_queues() {
        // A named queue is reused, never created or torn down
        let config = ResourceConfig::from_json(r#"{"QueueName":"prod-q"}"#).unwrap();
        assert!(config.has_queue_name());

        let config = ResourceConfig::from_json(r#"{"QueueName":""}"#).unwrap();
        assert!(!config.has_queue_name());

        let config = ResourceConfig::from_json("{}").unwrap();
        assert!(!config.has_queue_name());
    }

    #[test]
    fn test_has_queue_name_true_after_fill_in() {
        let mut config = ResourceConfig::default();
        assert!(!config.has_queue_name());
        config.queue_name_or_default("myqueue");
        assert!(config.has_queue_name());
    }

    #[test]
    fn test_has_instance() {
        let mut config = ResourceConfig::default();
        assert!(!config.has_instance());
        config.set_instance("web-1".to_string(), "i-0abc123".to_string());
        assert!(config.has_instance());
    }
}
