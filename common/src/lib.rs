// Common library shared by the scheduler binary and tests

pub mod config;
pub mod errors;
pub mod models;
pub mod reconciler;
pub mod runbook;
pub mod schedule;
pub mod store;
pub mod telemetry;
