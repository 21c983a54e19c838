// Reconciler engine implementation

use crate::models::ScheduleRecord;
use crate::runbook::RunbookExecutor;
use crate::schedule::evaluate_record;
use crate::store::ScheduleStore;
use crate::telemetry;
use chrono::{Timelike, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Outcome of one reconcile pass.
///
/// The status is 200 whenever the snapshot could be read, regardless of how
/// many individual dispatches failed; those are visible only through logs
/// and counters. 500 means the snapshot read itself failed and nothing was
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub status_code: u16,
    pub body: String,
    pub evaluated: usize,
    pub dispatched: usize,
    pub skipped: usize,
    pub dispatch_failures: usize,
}

impl RunOutcome {
    fn scan_failed(message: String) -> Self {
        Self {
            status_code: 500,
            body: message,
            evaluated: 0,
            dispatched: 0,
            skipped: 0,
            dispatch_failures: 0,
        }
    }
}

/// Stateless reconciler over the schedule table.
///
/// Holds its collaborators for the lifetime of the process; every call to
/// [`run_once`](Self::run_once) re-derives the full desired-state set from
/// a fresh snapshot. No history is kept between passes and none may be
/// added: redundant start/stop requests are absorbed by the automation
/// layer's idempotence.
pub struct ReconcilerEngine {
    store: Arc<dyn ScheduleStore>,
    executor: Arc<dyn RunbookExecutor>,
}

impl ReconcilerEngine {
    /// Create a new engine over the given collaborators.
    pub fn new(store: Arc<dyn ScheduleStore>, executor: Arc<dyn RunbookExecutor>) -> Self {
        Self { store, executor }
    }

    /// Run one reconcile pass at the current UTC hour.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> RunOutcome {
        self.run_at_hour(Utc::now().hour() as u8).await
    }

    /// Run one reconcile pass at an explicit hour (0-23).
    ///
    /// Split out from [`run_once`](Self::run_once) so the decision behavior
    /// is testable without a clock.
    pub async fn run_at_hour(&self, current_hour: u8) -> RunOutcome {
        let started = Instant::now();

        let records = match self.store.scan().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to read schedule snapshot");
                return RunOutcome::scan_failed(format!("Error scanning schedule store: {e}"));
            }
        };

        info!(count = records.len(), current_hour, "Evaluating schedule records");

        let mut outcome = RunOutcome {
            status_code: 200,
            body: String::new(),
            evaluated: 0,
            dispatched: 0,
            skipped: 0,
            dispatch_failures: 0,
        };

        for record in &records {
            self.process_record(record, current_hour, &mut outcome).await;
        }

        telemetry::record_run_duration(started.elapsed().as_secs_f64());

        outcome.body = format!(
            "Schedule processing complete: {} evaluated, {} dispatched, {} skipped, {} failed",
            outcome.evaluated, outcome.dispatched, outcome.skipped, outcome.dispatch_failures
        );
        info!(
            evaluated = outcome.evaluated,
            dispatched = outcome.dispatched,
            skipped = outcome.skipped,
            dispatch_failures = outcome.dispatch_failures,
            "Reconcile pass complete"
        );

        outcome
    }

    /// Evaluate one record and dispatch its action if it has an instance id.
    ///
    /// Per-record failures never abort the pass: a missing instance id is a
    /// warning, a failed dispatch is an error, and the loop continues either
    /// way.
    async fn process_record(
        &self,
        record: &ScheduleRecord,
        current_hour: u8,
        outcome: &mut RunOutcome,
    ) {
        outcome.evaluated += 1;
        telemetry::record_evaluated(&record.resource_id);

        // An empty or blank instance id is as unactionable as a missing one:
        // it would produce an automation execution against nothing.
        let instance_id = record
            .instance_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let Some(instance_id) = instance_id else {
            warn!(resource_id = %record.resource_id, "Record missing instance id, skipping");
            outcome.skipped += 1;
            telemetry::record_skipped(&record.resource_id);
            return;
        };

        let action = evaluate_record(record, current_hour);

        info!(
            resource_id = %record.resource_id,
            instance_id = instance_id,
            action = %action,
            "Invoking automation runbook"
        );

        match self.executor.invoke(instance_id, action).await {
            Ok(handle) => {
                info!(
                    instance_id = instance_id,
                    execution_id = %handle.execution_id,
                    "Automation execution started"
                );
                outcome.dispatched += 1;
                telemetry::record_dispatched(instance_id, action.as_str());
            }
            Err(e) => {
                error!(
                    instance_id = instance_id,
                    error = %e,
                    "Failed to start automation, continuing with remaining records"
                );
                outcome.dispatch_failures += 1;
                telemetry::record_dispatch_failure(instance_id);
            }
        }
    }
}
