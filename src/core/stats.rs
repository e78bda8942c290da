//! Count aggregation over date ranges.
//!
//! Translates user-facing ranges into store queries and shapes the results
//! for display. Owns no persistent state: every call recomputes from the
//! store, so a snapshot is always read-after-write consistent with the
//! insert that preceded it.

use crate::db::queries::{count_between, load_between};
use crate::errors::AppResult;
use crate::models::day_count::DayCount;
use crate::utils::date::{
    day_key_of, days_in_range, end_of_day, end_of_month, end_of_week, start_of_day,
    start_of_month, start_of_week,
};
use chrono::{NaiveDateTime, Weekday};
use rusqlite::Connection;
use std::collections::HashMap;

/// The three headline counts shown after every recorded moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub today: i64,
    pub week: i64,
    pub month: i64,
}

pub struct StatsLogic;

impl StatsLogic {
    /// Recompute today / this-week / this-month counts as of `now`.
    /// Week boundaries follow the configured first day of the week; month
    /// boundaries are calendar-month. All ranges are inclusive through the
    /// last second of their final day.
    pub fn refresh(
        conn: &Connection,
        week_start: Weekday,
        now: NaiveDateTime,
    ) -> AppResult<StatsSnapshot> {
        let day = now.date();

        let today = count_between(conn, start_of_day(day), end_of_day(day))?;

        let week = count_between(
            conn,
            start_of_day(start_of_week(day, week_start)),
            end_of_day(end_of_week(day, week_start)),
        )?;

        let month = count_between(
            conn,
            start_of_day(start_of_month(day)),
            end_of_day(end_of_month(day)),
        )?;

        Ok(StatsSnapshot { today, week, month })
    }

    /// Per-day counts for every calendar day from `start`'s day through
    /// `end`'s day, zero-count days included.
    ///
    /// Single pass over the fetched moments, bucketed by their stored day
    /// key. A moment's key was frozen at insertion time, so grouping stays
    /// exact without per-query date arithmetic.
    pub fn count_by_day(
        conn: &Connection,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<DayCount>> {
        let moments = load_between(conn, start, end)?;

        let mut buckets: HashMap<&str, i64> = HashMap::new();
        for m in &moments {
            *buckets.entry(m.day_key.as_str()).or_insert(0) += 1;
        }

        let out = days_in_range(start.date(), end.date())
            .into_iter()
            .map(|day| DayCount {
                count: buckets.get(day_key_of(day).as_str()).copied().unwrap_or(0),
                day,
            })
            .collect();

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::record_moment;
    use chrono::NaiveDate;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn empty_store_yields_zero_snapshot() {
        let conn = test_conn();
        let snap = StatsLogic::refresh(&conn, Weekday::Mon, ts("2024-01-10 12:00:00")).unwrap();
        assert_eq!(
            snap,
            StatsSnapshot {
                today: 0,
                week: 0,
                month: 0
            }
        );
    }

    #[test]
    fn todays_moments_count_toward_all_three_windows() {
        let conn = test_conn();
        for _ in 0..3 {
            record_moment(&conn, ts("2024-01-10 09:30:00")).unwrap();
        }
        record_moment(&conn, ts("2024-01-08 08:00:00")).unwrap(); // same ISO week
        record_moment(&conn, ts("2024-01-01 08:00:00")).unwrap(); // same month only

        let snap = StatsLogic::refresh(&conn, Weekday::Mon, ts("2024-01-10 23:00:00")).unwrap();
        assert_eq!(snap.today, 3);
        assert_eq!(snap.week, 4);
        assert_eq!(snap.month, 5);
    }

    #[test]
    fn range_bounds_are_inclusive_on_both_ends() {
        let conn = test_conn();
        record_moment(&conn, ts("2024-01-10 00:00:00")).unwrap();
        record_moment(&conn, ts("2024-01-10 23:59:59")).unwrap();
        record_moment(&conn, ts("2024-01-11 00:00:00")).unwrap(); // one second past end

        let n = count_between(
            &conn,
            ts("2024-01-10 00:00:00"),
            ts("2024-01-10 23:59:59"),
        )
        .unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn count_by_day_buckets_by_insertion_day_key() {
        let conn = test_conn();
        record_moment(&conn, ts("2024-01-01 10:00:00")).unwrap();
        record_moment(&conn, ts("2024-01-01 23:59:00")).unwrap();
        record_moment(&conn, ts("2024-01-02 00:01:00")).unwrap();

        let rows = StatsLogic::count_by_day(
            &conn,
            ts("2024-01-01 00:00:00"),
            ts("2024-01-02 23:59:59"),
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].day, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn count_by_day_keeps_zero_days_and_matches_range_count() {
        let conn = test_conn();
        record_moment(&conn, ts("2024-03-01 12:00:00")).unwrap();
        record_moment(&conn, ts("2024-03-04 12:00:00")).unwrap();
        record_moment(&conn, ts("2024-03-04 13:00:00")).unwrap();

        let start = ts("2024-03-01 00:00:00");
        let end = ts("2024-03-05 23:59:59");
        let rows = StatsLogic::count_by_day(&conn, start, end).unwrap();

        // one entry per calendar day, no gaps
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].count, 0);
        assert_eq!(rows[2].count, 0);
        assert_eq!(rows[4].count, 0);

        // histogram total equals the plain range count
        let total: i64 = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, count_between(&conn, start, end).unwrap());
    }

    #[test]
    fn single_day_range_returns_one_entry() {
        let conn = test_conn();
        for _ in 0..4 {
            record_moment(&conn, ts("2024-05-20 15:00:00")).unwrap();
        }

        let rows = StatsLogic::count_by_day(
            &conn,
            ts("2024-05-20 00:00:00"),
            ts("2024-05-20 23:59:59"),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 4);
    }
}
