// Telemetry module for structured logging and metrics

use anyhow::Result;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize structured logging with JSON formatting.
///
/// Log levels come from `RUST_LOG` when set, otherwise from configuration.
pub fn init_logging(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::info!(log_level = log_level, "Structured logging initialized");

    Ok(())
}

/// Initialize the Prometheus metrics exporter and register all metrics.
pub fn init_metrics(metrics_port: u16) -> Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", metrics_port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid metrics port: {}", e))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;

    describe_counter!(
        "reconcile_records_evaluated_total",
        "Total number of schedule records evaluated"
    );
    describe_counter!(
        "reconcile_actions_dispatched_total",
        "Total number of automation actions dispatched"
    );
    describe_counter!(
        "reconcile_dispatch_failures_total",
        "Total number of failed automation dispatches"
    );
    describe_counter!(
        "reconcile_records_skipped_total",
        "Total number of records skipped for missing instance id"
    );
    describe_histogram!(
        "reconcile_run_duration_seconds",
        "Duration of one reconcile pass in seconds"
    );

    tracing::info!(
        metrics_port = metrics_port,
        "Prometheus metrics exporter initialized"
    );

    Ok(())
}

/// Record one evaluated schedule record.
#[inline]
pub fn record_evaluated(resource_id: &str) {
    counter!("reconcile_records_evaluated_total", "resource_id" => resource_id.to_string())
        .increment(1);
}

/// Record one dispatched automation action.
#[inline]
pub fn record_dispatched(instance_id: &str, action: &str) {
    counter!(
        "reconcile_actions_dispatched_total",
        "instance_id" => instance_id.to_string(),
        "action" => action.to_string()
    )
    .increment(1);
}

/// Record one failed automation dispatch.
#[inline]
pub fn record_dispatch_failure(instance_id: &str) {
    counter!("reconcile_dispatch_failures_total", "instance_id" => instance_id.to_string())
        .increment(1);
}

/// Record one record skipped for having no instance id.
#[inline]
pub fn record_skipped(resource_id: &str) {
    counter!("reconcile_records_skipped_total", "resource_id" => resource_id.to_string())
        .increment(1);
}

/// Record the duration of one reconcile pass.
#[inline]
pub fn record_run_duration(duration_seconds: f64) {
    histogram!("reconcile_run_duration_seconds").record(duration_seconds);
}
