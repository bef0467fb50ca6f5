use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the history ledger.
pub const HISTORY_CAP: usize = 200;

/// Represents a single history entry for a visited page.
///
/// `timestamp` is an ISO-8601 UTC string with millisecond precision,
/// e.g. `2025-09-05T08:30:00.000Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub timestamp: String,
}
