// Schedule window evaluation
//
// This module implements the single decision rule of the system: given the
// current wall-clock hour and a record's startup/shutdown hours, compute
// whether the instance should be running or stopped right now.

use crate::models::{DesiredAction, ScheduleRecord};

/// Compute the desired action for the current hour.
///
/// All arguments are hours-of-day in 0..=23 (UTC).
///
/// Two window shapes exist:
/// - `shutdown_hour > startup_hour`: the normal same-day window
///   (e.g. start at 8, stop at 23). The instance runs in
///   `[startup_hour, shutdown_hour)` and is stopped outside it.
/// - `shutdown_hour <= startup_hour`: the wrap-around window
///   (e.g. stop at 1, start at 15). The instance is stopped in
///   `[shutdown_hour, startup_hour)` and runs outside it.
///
/// Bounds are inclusive-low / exclusive-high in both branches. When
/// `shutdown_hour == startup_hour` the stop window `[h, h)` is empty and
/// the result is always `Start`; this boundary behavior is load-bearing
/// for existing schedules and must not be "fixed".
pub fn desired_action(current_hour: u8, startup_hour: u8, shutdown_hour: u8) -> DesiredAction {
    if shutdown_hour > startup_hour {
        if current_hour >= shutdown_hour || current_hour < startup_hour {
            DesiredAction::Stop
        } else {
            DesiredAction::Start
        }
    } else if shutdown_hour <= current_hour && current_hour < startup_hour {
        DesiredAction::Stop
    } else {
        DesiredAction::Start
    }
}

/// Evaluate one schedule record at the given hour, applying the per-field
/// default fallbacks for missing or malformed time values.
pub fn evaluate_record(record: &ScheduleRecord, current_hour: u8) -> DesiredAction {
    desired_action(current_hour, record.startup_hour(), record.shutdown_hour())
}
