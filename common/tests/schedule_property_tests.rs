// Property-based tests for the schedule decision rule

use common::models::{DesiredAction, ScheduleRecord};
use common::schedule::{desired_action, evaluate_record};
use proptest::prelude::*;

fn hour() -> impl Strategy<Value = u8> {
    0u8..24
}

proptest! {
    /// *For any* same-day window (startup < shutdown), the instance runs
    /// exactly inside [startup, shutdown) and is stopped outside it.
    #[test]
    fn property_same_day_window_membership(
        current in hour(),
        startup in 0u8..23,
        offset in 1u8..23,
    ) {
        let shutdown = startup.saturating_add(offset).min(23);
        prop_assume!(shutdown > startup);

        let expected = if current >= startup && current < shutdown {
            DesiredAction::Start
        } else {
            DesiredAction::Stop
        };
        prop_assert_eq!(desired_action(current, startup, shutdown), expected);
    }

    /// *For any* wrap-around window (shutdown <= startup), the instance is
    /// stopped exactly inside [shutdown, startup) and runs outside it.
    #[test]
    fn property_wraparound_window_membership(
        current in hour(),
        startup in hour(),
        shutdown in hour(),
    ) {
        prop_assume!(shutdown <= startup);

        let expected = if current >= shutdown && current < startup {
            DesiredAction::Stop
        } else {
            DesiredAction::Start
        };
        prop_assert_eq!(desired_action(current, startup, shutdown), expected);
    }

    /// *For any* input, the decision rule is a pure function: two calls
    /// with identical arguments yield identical output.
    #[test]
    fn property_decision_is_deterministic(
        current in hour(),
        startup in hour(),
        shutdown in hour(),
    ) {
        prop_assert_eq!(
            desired_action(current, startup, shutdown),
            desired_action(current, startup, shutdown)
        );
    }

    /// *For any* hour, equal startup and shutdown hours leave an empty stop
    /// window, so the decision is always start.
    #[test]
    fn property_equal_hours_always_start(current in hour(), boundary in hour()) {
        prop_assert_eq!(
            desired_action(current, boundary, boundary),
            DesiredAction::Start
        );
    }

    /// *For any* hour, a record with a malformed shutdown time behaves
    /// identically to one declaring the default "23".
    #[test]
    fn property_malformed_shutdown_uses_default(current in hour()) {
        let malformed = ScheduleRecord {
            resource_id: "r".to_string(),
            instance_id: Some("i-0abc".to_string()),
            shutdown_time: Some("bad".to_string()),
            startup_time: Some("8".to_string()),
        };
        let explicit = ScheduleRecord {
            shutdown_time: Some("23".to_string()),
            ..malformed.clone()
        };
        prop_assert_eq!(
            evaluate_record(&malformed, current),
            evaluate_record(&explicit, current)
        );
    }

    /// *For any* hour, a record with a malformed startup time behaves
    /// identically to one declaring the default "8".
    #[test]
    fn property_malformed_startup_uses_default(current in hour()) {
        let malformed = ScheduleRecord {
            resource_id: "r".to_string(),
            instance_id: Some("i-0abc".to_string()),
            shutdown_time: Some("23".to_string()),
            startup_time: Some("25:00".to_string()),
        };
        let explicit = ScheduleRecord {
            startup_time: Some("8".to_string()),
            ..malformed.clone()
        };
        prop_assert_eq!(
            evaluate_record(&malformed, current),
            evaluate_record(&explicit, current)
        );
    }
}

/// Fixed scenarios exercised by operators when validating new schedules.
#[test]
fn test_known_scenarios() {
    // startup 8, shutdown 23
    assert_eq!(desired_action(10, 8, 23), DesiredAction::Start);
    assert_eq!(desired_action(23, 8, 23), DesiredAction::Stop);
    assert_eq!(desired_action(2, 8, 23), DesiredAction::Stop);
    // startup 15, shutdown 1 (wrap-around)
    assert_eq!(desired_action(0, 15, 1), DesiredAction::Start);
    assert_eq!(desired_action(5, 15, 1), DesiredAction::Stop);
}
