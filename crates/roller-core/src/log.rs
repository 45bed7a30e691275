//! In-session roll log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evaluate::RollResult;

/// One logged roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
    /// The roll, with full provenance.
    pub result: RollResult,
}

/// Chronological list of rolls made this session. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct RollLog {
    entries: Vec<LogEntry>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll made now.
    pub fn append(&mut self, result: RollResult) -> &LogEntry {
        let index = self.entries.len();
        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            result,
        });
        &self.entries[index]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
