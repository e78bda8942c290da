//! Store adapter for the `moments` table: append-only insert plus
//! inclusive-range fetch and count. Timestamps are stored as fixed-width
//! TEXT, so BETWEEN compares lexicographically and both bounds stay
//! inclusive.

use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::moment::{Moment, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Moment> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(Moment {
        id: row.get("id")?,
        timestamp,
        day_key: row.get("day_key")?,
        source: row.get("source")?,
    })
}

/// Persist one moment. Either the row is durable or an error surfaces;
/// there is no partial state and the caller does not retry.
pub fn insert_moment(conn: &Connection, m: &Moment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO moments (timestamp, day_key, source)
         VALUES (?1, ?2, ?3)",
        params![m.timestamp_str(), m.day_key, m.source],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Number of moments with `start <= timestamp <= end`.
pub fn count_between(conn: &Connection, start: NaiveDateTime, end: NaiveDateTime) -> AppResult<i64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM moments WHERE timestamp BETWEEN ?1 AND ?2",
        params![
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string()
        ],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// All moments in `[start, end]` inclusive, ordered by ascending timestamp.
pub fn load_between(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<Moment>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, day_key, source FROM moments
         WHERE timestamp BETWEEN ?1 AND ?2
         ORDER BY timestamp ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Moment>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, day_key, source FROM moments ORDER BY timestamp ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Convenience used by tests and bulk seeding: build and insert a moment
/// for the given timestamp in one call.
pub fn record_moment(conn: &Connection, ts: NaiveDateTime) -> AppResult<Moment> {
    let mut m = Moment::new(ts);
    m.id = insert_moment(conn, &m)?;
    Ok(m)
}
