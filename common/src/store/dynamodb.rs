//! DynamoDB-backed schedule store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{debug, info, warn};

use crate::config::{AwsConfig, ScheduleStoreConfig};
use crate::errors::StoreError;
use crate::models::ScheduleRecord;
use crate::store::ScheduleStore;

// Attribute names as written by the provisioning tooling.
const ATTR_RESOURCE_ID: &str = "ResourceID";
const ATTR_INSTANCE_ID: &str = "EC2InstanceId";
const ATTR_SHUTDOWN_TIME: &str = "ShutdownTime";
const ATTR_STARTUP_TIME: &str = "StartupTime";

/// Schedule store reading from a DynamoDB table.
pub struct DynamoScheduleStore {
    client: Client,
    table_name: String,
}

impl DynamoScheduleStore {
    /// Create a new store from project config.
    ///
    /// Credentials come from the default provider chain unless static keys
    /// are configured (local dev / explicit config).
    pub async fn new(aws: &AwsConfig, store: &ScheduleStoreConfig) -> Self {
        let region = aws_sdk_dynamodb::config::Region::new(aws.region.clone());

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let (Some(key_id), Some(secret)) = (&aws.access_key_id, &aws.secret_access_key) {
            let creds = Credentials::new(key_id, secret, None, None, "schedule-store-static");
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
            table_name = %store.table_name,
            region = %aws.region,
            "DynamoDB schedule store initialized"
        );

        Self {
            client,
            table_name: store.table_name.clone(),
        }
    }
}

#[async_trait]
impl ScheduleStore for DynamoScheduleStore {
    async fn scan(&self) -> Result<Vec<ScheduleRecord>, StoreError> {
        debug!(table_name = %self.table_name, "Scanning schedule table");

        let resp = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::ScanFailed {
                table: self.table_name.clone(),
                reason: format!("{e:?}"),
            })?;

        let items = resp.items.unwrap_or_default();
        debug!(count = items.len(), "Received schedule items");

        Ok(items.into_iter().map(record_from_item).collect())
    }
}

/// Convert one DynamoDB item into a [`ScheduleRecord`].
///
/// The conversion is total: missing or non-string attributes degrade to the
/// same "absent field" handling the evaluator already applies, so one odd
/// item never fails the snapshot.
pub fn record_from_item(item: HashMap<String, AttributeValue>) -> ScheduleRecord {
    let resource_id = string_attr(&item, ATTR_RESOURCE_ID).unwrap_or_else(|| {
        warn!("Schedule item missing ResourceID attribute");
        "unknown".to_string()
    });

    ScheduleRecord {
        resource_id,
        instance_id: string_attr(&item, ATTR_INSTANCE_ID),
        shutdown_time: string_attr(&item, ATTR_SHUTDOWN_TIME),
        startup_time: string_attr(&item, ATTR_STARTUP_TIME),
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}
