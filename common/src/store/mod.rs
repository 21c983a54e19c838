// Schedule store abstraction
//
// The schedule table is an external collaborator: this system only ever
// reads a full snapshot of it, once per reconcile pass.

pub mod dynamodb;

use crate::errors::StoreError;
use crate::models::ScheduleRecord;
use async_trait::async_trait;

pub use dynamodb::DynamoScheduleStore;

/// ScheduleStore provides the one read operation this system consumes.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Return the full current set of schedule records.
    ///
    /// Failure here is fatal to the reconcile pass that observes it.
    async fn scan(&self) -> Result<Vec<ScheduleRecord>, StoreError>;
}
