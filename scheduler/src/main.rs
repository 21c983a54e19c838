// Scheduler binary entry point

use common::config::Settings;
use common::reconciler::ReconcilerEngine;
use common::runbook::{RunbookExecutor, SsmRunbookExecutor};
use common::store::{DynamoScheduleStore, ScheduleStore};
use common::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration. The log filter level lives in the settings, so on
    // a load failure logging comes up with the fallback level first and the
    // failure is still visible as a structured event.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            let _ = telemetry::init_logging("info");
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    // Initialize tracing/logging
    telemetry::init_logging(&settings.observability.log_level)?;

    info!("Starting instance schedule reconciler");

    if let Err(e) = settings.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    info!(
        table_name = %settings.schedule_store.table_name,
        document_name = %settings.runbook.document_name,
        poll_interval_seconds = settings.scheduler.poll_interval_seconds,
        "Configuration loaded"
    );

    // Initialize Prometheus metrics exporter
    telemetry::init_metrics(settings.observability.metrics_port)?;

    // Construct the external collaborators; their lifetime is the process
    let store = Arc::new(DynamoScheduleStore::new(&settings.aws, &settings.schedule_store).await)
        as Arc<dyn ScheduleStore>;
    let executor = Arc::new(SsmRunbookExecutor::new(&settings.aws, &settings.runbook).await)
        as Arc<dyn RunbookExecutor>;

    let engine = ReconcilerEngine::new(store, executor);
    info!("Reconciler engine created");

    // Each tick is one stateless reconcile pass. A failed pass is logged and
    // the next tick starts over from a fresh snapshot.
    let mut poll_interval = interval(Duration::from_secs(settings.scheduler.poll_interval_seconds));

    loop {
        tokio::select! {
            _ = poll_interval.tick() => {
                let outcome = engine.run_once().await;
                if outcome.status_code == 200 {
                    info!(status = outcome.status_code, body = %outcome.body, "Reconcile pass finished");
                } else {
                    warn!(status = outcome.status_code, body = %outcome.body, "Reconcile pass failed");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C signal, shutting down");
                break;
            }
        }
    }

    info!("Reconciler stopped");
    Ok(())
}
