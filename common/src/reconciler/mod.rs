// Reconciler module: one stateless pass over the schedule snapshot

pub mod engine;

pub use engine::{ReconcilerEngine, RunOutcome};
