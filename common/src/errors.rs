// Error handling framework

use thiserror::Error;

/// Schedule store errors. A scan failure is fatal to the invocation that
/// observes it: no records are evaluated and the run reports failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to scan table '{table}': {reason}")]
    ScanFailed { table: String, reason: String },
}

/// Automation runbook errors. An invoke failure is recoverable at the run
/// level: it is logged for the affected record and processing continues.
#[derive(Error, Debug)]
pub enum RunbookError {
    #[error("Failed to start automation '{document}' for instance {instance_id}: {reason}")]
    InvokeFailed {
        document: String,
        instance_id: String,
        reason: String,
    },

    #[error("Automation '{document}' returned no execution id")]
    MissingExecutionId { document: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::ScanFailed {
            table: "resource_schedules".to_string(),
            reason: "throttled".to_string(),
        };
        assert!(err.to_string().contains("resource_schedules"));
        assert!(err.to_string().contains("throttled"));
    }

    #[test]
    fn test_runbook_error_display() {
        let err = RunbookError::InvokeFailed {
            document: "StartStopInstancesRunbook".to_string(),
            instance_id: "i-0123456789abcdef0".to_string(),
            reason: "access denied".to_string(),
        };
        assert!(err.to_string().contains("i-0123456789abcdef0"));
    }
}
