// Property-based tests for the scheduler binary's configuration surface

use common::config::Settings;
use proptest::prelude::*;

/// *For any* positive poll interval and metrics port, the settings used by
/// the scheduler loop validate cleanly.
#[test]
fn property_valid_loop_settings() {
    proptest!(|(
        poll_interval_seconds in 1u64..86400u64,
        metrics_port in 1u16..u16::MAX,
    )| {
        let mut settings = Settings::default();
        settings.scheduler.poll_interval_seconds = poll_interval_seconds;
        settings.observability.metrics_port = metrics_port;
        prop_assert!(settings.validate().is_ok());
    });
}

/// *For any* settings with a zero poll interval, validation rejects the
/// configuration before the loop can start.
#[test]
fn property_zero_interval_rejected() {
    proptest!(|(metrics_port in 1u16..u16::MAX)| {
        let mut settings = Settings::default();
        settings.scheduler.poll_interval_seconds = 0;
        settings.observability.metrics_port = metrics_port;
        prop_assert!(settings.validate().is_err());
    });
}

/// The deployment defaults point at the ops-provisioned table and document.
#[test]
fn test_deployment_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.schedule_store.table_name, "resource_schedules");
    assert_eq!(settings.runbook.document_name, "StartStopInstancesRunbook");
    assert!(settings.scheduler.poll_interval_seconds > 0);
}
