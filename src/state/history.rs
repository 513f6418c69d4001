//! Bounded calculation history.
//!
//! Keeps the most recent calculations of a session in insertion order,
//! evicting the oldest record once the log is full.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of records kept by a [`HistoryLog`].
pub const HISTORY_CAPACITY: usize = 50;

/// Record of a single successful calculation.
///
/// Records are immutable values describing what was calculated and when.
///
/// # Example
///
/// ```rust
/// use reckon::state::CalculationRecord;
/// use chrono::{Local, TimeZone};
///
/// let record = CalculationRecord {
///     timestamp: Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
///     text: "2 + 2 = 4.000000".to_string(),
/// };
///
/// assert_eq!(record.to_string(), "09:05:07 - 2 + 2 = 4.000000");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// When the calculation completed
    pub timestamp: DateTime<Local>,
    /// Description of the operation and its result
    pub text: String,
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp.format("%H:%M:%S"), self.text)
    }
}

/// Ordered, bounded log of calculation records.
///
/// The log never holds more than [`HISTORY_CAPACITY`] records. Appending
/// to a full log evicts the oldest record first.
///
/// # Example
///
/// ```rust
/// use reckon::state::HistoryLog;
///
/// let mut history = HistoryLog::new();
/// history.record("2 + 2 = 4.000000");
/// history.record("   ");
///
/// assert_eq!(history.count(), 1);
/// assert_eq!(history.all()[0].text, "2 + 2 = 4.000000");
/// ```
///
/// Serialized as a plain list of records. Deserializing a longer list keeps
/// only the newest [`HISTORY_CAPACITY`] records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CalculationRecord>", into = "Vec<CalculationRecord>")]
pub struct HistoryLog {
    records: VecDeque<CalculationRecord>,
}

impl HistoryLog {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a calculation stamped with the current local time.
    ///
    /// Blank or whitespace-only text is ignored.
    pub fn record(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }

        self.records.push_back(CalculationRecord {
            timestamp: Local::now(),
            text,
        });

        if self.records.len() > HISTORY_CAPACITY {
            self.records.pop_front();
        }
    }

    /// Owned copy of every record, oldest first.
    ///
    /// Later mutations of the log are not visible through the copy.
    pub fn all(&self) -> Vec<CalculationRecord> {
        self.records.iter().cloned().collect()
    }

    /// The final `min(n, count)` records, oldest first.
    pub fn last(&self, n: usize) -> Vec<CalculationRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CalculationRecord>> for HistoryLog {
    fn from(records: Vec<CalculationRecord>) -> Self {
        let skip = records.len().saturating_sub(HISTORY_CAPACITY);
        Self {
            records: records.into_iter().skip(skip).collect(),
        }
    }
}

impl From<HistoryLog> for Vec<CalculationRecord> {
    fn from(history: HistoryLog) -> Self {
        history.records.into()
    }
}
