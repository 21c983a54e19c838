//! SSM Automation runbook executor.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_ssm::Client;
use tracing::{debug, info};

use crate::config::{AwsConfig, RunbookConfig};
use crate::errors::RunbookError;
use crate::models::{DesiredAction, ExecutionHandle};
use crate::runbook::RunbookExecutor;

/// Runbook executor backed by SSM Automation.
pub struct SsmRunbookExecutor {
    client: Client,
    document_name: String,
}

impl SsmRunbookExecutor {
    /// Create a new executor from project config.
    ///
    /// Credentials come from the default provider chain unless static keys
    /// are configured (local dev / explicit config).
    pub async fn new(aws: &AwsConfig, runbook: &RunbookConfig) -> Self {
        let region = aws_sdk_ssm::config::Region::new(aws.region.clone());

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let (Some(key_id), Some(secret)) = (&aws.access_key_id, &aws.secret_access_key) {
            let creds = Credentials::new(key_id, secret, None, None, "runbook-static");
            loader = loader.credentials_provider(creds);
        }

        if let Some(ref endpoint) = aws.endpoint_url {
            if !endpoint.is_empty() {
                loader = loader.endpoint_url(endpoint);
            }
        }

        let aws_cfg = loader.load().await;
        let client = Client::new(&aws_cfg);

        info!(
            document_name = %runbook.document_name,
            region = %aws.region,
            "SSM runbook executor initialized"
        );

        Self {
            client,
            document_name: runbook.document_name.clone(),
        }
    }
}

#[async_trait]
impl RunbookExecutor for SsmRunbookExecutor {
    async fn invoke(
        &self,
        instance_id: &str,
        action: DesiredAction,
    ) -> Result<ExecutionHandle, RunbookError> {
        debug!(
            instance_id = instance_id,
            action = %action,
            "Starting automation execution"
        );

        let resp = self
            .client
            .start_automation_execution()
            .document_name(&self.document_name)
            .parameters("InstanceId", vec![instance_id.to_string()])
            .parameters("Action", vec![action.as_str().to_string()])
            .send()
            .await
            .map_err(|e| RunbookError::InvokeFailed {
                document: self.document_name.clone(),
                instance_id: instance_id.to_string(),
                reason: format!("{e:?}"),
            })?;

        let execution_id =
            resp.automation_execution_id
                .ok_or_else(|| RunbookError::MissingExecutionId {
                    document: self.document_name.clone(),
                })?;

        Ok(ExecutionHandle { execution_id })
    }
}
