// Configuration management with layered configuration (file, env)

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure containing all configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub aws: AwsConfig,
    pub schedule_store: ScheduleStoreConfig,
    pub runbook: RunbookConfig,
    pub scheduler: SchedulerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    /// Endpoint override for local development (e.g. DynamoDB Local).
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStoreConfig {
    /// DynamoDB table holding the schedule records.
    pub table_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunbookConfig {
    /// SSM Automation document invoked with (InstanceId, Action).
    pub document_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How often to run a reconcile pass (in seconds)
    pub poll_interval_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub metrics_port: u16,
}

impl Settings {
    /// Load configuration with layered precedence: defaults → file → env
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add local configuration (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment-specific configuration
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let mut settings: Settings = config.try_deserialize()?;
        settings.apply_deployment_env();
        Ok(settings)
    }

    /// Apply the flat deployment environment variables recognized by ops
    /// tooling. These take precedence over file and APP__* sources.
    fn apply_deployment_env(&mut self) {
        if let Ok(table) = std::env::var("DDB_TABLE") {
            if !table.is_empty() {
                self.schedule_store.table_name = table;
            }
        }
        if let Ok(document) = std::env::var("SSM_RUNBOOK_NAME") {
            if !document.is_empty() {
                self.runbook.document_name = document;
            }
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if self.aws.region.is_empty() {
            return Err("AWS region cannot be empty".to_string());
        }

        if self.schedule_store.table_name.is_empty() {
            return Err("Schedule store table_name cannot be empty".to_string());
        }

        if self.runbook.document_name.is_empty() {
            return Err("Runbook document_name cannot be empty".to_string());
        }

        if self.scheduler.poll_interval_seconds == 0 {
            return Err("Scheduler poll_interval_seconds must be greater than 0".to_string());
        }

        if self.observability.metrics_port == 0 {
            return Err("Metrics port must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aws: AwsConfig {
                region: "us-east-1".to_string(),
                endpoint_url: None,
                access_key_id: None,
                secret_access_key: None,
            },
            schedule_store: ScheduleStoreConfig {
                table_name: "resource_schedules".to_string(),
            },
            runbook: RunbookConfig {
                document_name: "StartStopInstancesRunbook".to_string(),
            },
            scheduler: SchedulerConfig {
                poll_interval_seconds: 300,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                metrics_port: 9090,
            },
        }
    }
}
