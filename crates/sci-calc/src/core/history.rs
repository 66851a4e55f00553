//! In-memory calculation history
//!
//! Lives only as long as the session. Entries serialize to JSON for the
//! headless `eval` output, never to disk.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{format_result, AngleMode};

/// A single successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it was in the buffer
    pub expression: String,
    /// The numeric result
    pub result: f64,
    /// The result as shown on the display
    pub display: String,
    /// Angle mode in effect when the expression was evaluated
    pub mode: AngleMode,
    /// Unix epoch millis
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates a new entry stamped with the current time
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64, mode: AngleMode) -> Self {
        Self::with_timestamp(expression, result, mode, Self::current_timestamp())
    }

    /// Creates an entry with a specific timestamp
    #[must_use]
    pub fn with_timestamp(
        expression: impl Into<String>,
        result: f64,
        mode: AngleMode,
        timestamp: u64,
    ) -> Self {
        Self {
            expression: expression.into(),
            result,
            display: format_result(result),
            mode,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// `expression = result` line for the history panel
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} = {}", self.expression, self.display)
    }
}

/// Bounded history, oldest entries evicted first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size (at least one entry)
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a successful evaluation
    pub fn record(&mut self, expression: &str, result: f64, mode: AngleMode) {
        self.push(HistoryEntry::new(expression, result, mode));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Serializes the entries (oldest first) as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}
