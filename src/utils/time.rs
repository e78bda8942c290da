//! Timestamp parsing for the `--at` backfill flag.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Parse "YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS".
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let ts = parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;
        Ok(Some(ts))
    } else {
        Ok(None)
    }
}
