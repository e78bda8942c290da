use crate::utils::date::day_key;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Storage format for `moments.timestamp` (TEXT column).
/// Fixed-width, so inclusive range queries work by lexicographic comparison.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged anxiety moment.
///
/// Immutable after creation: the store is append-only, no command updates
/// or deletes a row.
#[derive(Debug, Clone, Serialize)]
pub struct Moment {
    pub id: i64,
    pub timestamp: NaiveDateTime, // ⇔ moments.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub day_key: String,          // ⇔ moments.day_key (TEXT "YYYY-MM-DD")
    pub source: String,           // ⇔ moments.source (TEXT, default 'cli')
}

impl Moment {
    /// High-level constructor for moments created by the CLI.
    /// - Derives `day_key` from the timestamp's calendar day.
    ///   The key is frozen at creation time and never recomputed, even if
    ///   the device's time zone later changes.
    /// - Sets `source = "cli"`.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            id: 0,
            day_key: day_key(timestamp),
            timestamp,
            source: "cli".to_string(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
