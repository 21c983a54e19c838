use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Schedule Models
// ============================================================================

/// Default shutdown hour applied when a record carries no (or a malformed)
/// ShutdownTime value.
pub const DEFAULT_SHUTDOWN_HOUR: u8 = 23;

/// Default startup hour applied when a record carries no (or a malformed)
/// StartupTime value.
pub const DEFAULT_STARTUP_HOUR: u8 = 8;

/// ScheduleRecord is one row of the schedule table: the declared daily
/// on/off window for a single managed resource.
///
/// The table is owned by operators and is read-only to this system; records
/// are created, updated, and deleted entirely outside of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRecord {
    /// Logical identifier of the managed resource (table partition key).
    pub resource_id: String,
    /// Instance to act on. Records without a non-empty one are skipped
    /// with a warning.
    pub instance_id: Option<String>,
    /// Raw hour-of-day string at which the resource should become stopped,
    /// e.g. "23" or "23:00". Missing or malformed ⇒ 23.
    pub shutdown_time: Option<String>,
    /// Raw hour-of-day string at which the resource should become running.
    /// Missing or malformed ⇒ 8.
    pub startup_time: Option<String>,
}

impl ScheduleRecord {
    /// Shutdown hour with the per-field default fallback applied.
    pub fn shutdown_hour(&self) -> u8 {
        parse_hour(self.shutdown_time.as_deref(), DEFAULT_SHUTDOWN_HOUR)
    }

    /// Startup hour with the per-field default fallback applied.
    pub fn startup_hour(&self) -> u8 {
        parse_hour(self.startup_time.as_deref(), DEFAULT_STARTUP_HOUR)
    }
}

/// Parse an hour-of-day from the numeric prefix before any colon.
///
/// Accepts "8", "08", "23:00", "23:45:00". Anything that does not yield an
/// integer in 0..=23 falls back to `default` rather than failing the record.
pub fn parse_hour(raw: Option<&str>, default: u8) -> u8 {
    let Some(raw) = raw else {
        return default;
    };

    let prefix = raw.split(':').next().unwrap_or("").trim();
    match prefix.parse::<u8>() {
        Ok(hour) if hour < 24 => hour,
        _ => default,
    }
}

/// The start/stop directive computed for the current hour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DesiredAction {
    Start,
    Stop,
}

impl DesiredAction {
    /// Wire form expected by the automation runbook's `Action` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            DesiredAction::Start => "start",
            DesiredAction::Stop => "stop",
        }
    }
}

impl fmt::Display for DesiredAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by the automation layer for a dispatched action.
///
/// Tracking the execution is out of scope; the id is logged and forgotten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionHandle {
    pub execution_id: String,
}
