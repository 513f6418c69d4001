//! Read-only session snapshots for export.

use crate::state::CalculationRecord;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of a session at one point in time.
///
/// Snapshots are written to the terminal on request. They are never read
/// back into a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Local>,

    /// Whether scientific mode was enabled
    pub scientific: bool,

    /// Memory register value
    pub memory: f64,

    /// Calculation history, oldest first
    pub history: Vec<CalculationRecord>,
}

impl SessionSnapshot {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
