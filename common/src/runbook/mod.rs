// Automation runbook abstraction
//
// The actual start/stop of an instance is performed by an externally defined
// automation document. This system only requests an execution and logs the
// handle; result tracking belongs to the automation layer, which is also
// where idempotence lives (stopping an already-stopped instance is a no-op
// there).

pub mod ssm;

use crate::errors::RunbookError;
use crate::models::{DesiredAction, ExecutionHandle};
use async_trait::async_trait;

pub use ssm::SsmRunbookExecutor;

/// RunbookExecutor dispatches one start/stop action for one instance.
#[async_trait]
pub trait RunbookExecutor: Send + Sync {
    /// Request execution of the automation document for the given instance
    /// and action. Fire and forget: the returned handle is informational.
    async fn invoke(
        &self,
        instance_id: &str,
        action: DesiredAction,
    ) -> Result<ExecutionHandle, RunbookError>;
}
