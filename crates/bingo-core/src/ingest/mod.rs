//! Event ingestion.
//!
//! The telemetry layer and the control surface both talk to the session
//! through a `SessionHandle`. A single service thread owns the
//! `BingoSession` and applies commands one at a time in arrival order, so a
//! quest event can never interleave with a start or stop.

mod service;

pub use service::{SessionHandle, SessionService, spawn_forwarder};

use serde::{Deserialize, Serialize};

/// Inbound telemetry signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum TelemetryEvent {
    QuestCompleted(u32),
    RunRecorded(u32),
}
