//! Calendar utilities: day keys, day/week/month boundaries, day ranges.
//! All boundaries follow the local civil calendar; `end_of_*` is the last
//! whole second of the final day, so range queries stay inclusive on both
//! ends.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Canonical "YYYY-MM-DD" key for the calendar day of a timestamp.
pub fn day_key(ts: NaiveDateTime) -> String {
    day_key_of(ts.date())
}

pub fn day_key_of(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(23, 59, 59).unwrap()
}

/// First day of the week containing `d`, for a configurable first weekday.
pub fn start_of_week(d: NaiveDate, first: Weekday) -> NaiveDate {
    let offset =
        (d.weekday().num_days_from_monday() + 7 - first.num_days_from_monday()) % 7;
    d - Days::new(offset as u64)
}

pub fn end_of_week(d: NaiveDate, first: Weekday) -> NaiveDate {
    start_of_week(d, first) + Days::new(6)
}

pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap()
}

pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    let next = if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1).unwrap()
    };
    next - Days::new(1)
}

/// All calendar days from `start` through `end`, inclusive.
/// Empty when `start > end`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a period expression into its inclusive day bounds.
///
/// Supported forms:
/// - `YYYY`       → whole year
/// - `YYYY-MM`    → whole month
/// - `YYYY-MM-DD` → single day
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, end_of_month(first)));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidRange(p.to_string()))?;
        return Ok((first, NaiveDate::from_ymd_opt(year, 12, 31).unwrap()));
    }

    Err(AppError::InvalidRange(p.to_string()))
}

/// Parse a period or a `start:end` span of periods into day bounds.
/// The span takes the first day of the start period and the last day of the
/// end period, so `2024-01:2024-03` covers the whole quarter.
pub fn parse_span(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = s.split_once(':') {
        let (start, _) = parse_period(start_raw)?;
        let (_, end) = parse_period(end_raw)?;

        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok((start, end))
    } else {
        parse_period(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_key_is_stable_and_idempotent() {
        let ts = d(2024, 1, 1).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(day_key(ts), "2024-01-01");
        assert_eq!(day_key(ts), day_key(ts));
    }

    #[test]
    fn day_bounds_cover_whole_day() {
        let day = d(2024, 3, 15);
        assert_eq!(start_of_day(day), day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end_of_day(day), day.and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn week_bounds_monday_first() {
        // 2024-01-03 is a Wednesday
        let wed = d(2024, 1, 3);
        assert_eq!(start_of_week(wed, Weekday::Mon), d(2024, 1, 1));
        assert_eq!(end_of_week(wed, Weekday::Mon), d(2024, 1, 7));
        // a Monday is its own week start
        assert_eq!(start_of_week(d(2024, 1, 1), Weekday::Mon), d(2024, 1, 1));
    }

    #[test]
    fn week_bounds_sunday_first() {
        let wed = d(2024, 1, 3);
        assert_eq!(start_of_week(wed, Weekday::Sun), d(2023, 12, 31));
        assert_eq!(end_of_week(wed, Weekday::Sun), d(2024, 1, 6));
    }

    #[test]
    fn month_bounds_handle_february_and_december() {
        assert_eq!(start_of_month(d(2024, 2, 15)), d(2024, 2, 1));
        assert_eq!(end_of_month(d(2024, 2, 15)), d(2024, 2, 29)); // leap year
        assert_eq!(end_of_month(d(2023, 2, 1)), d(2023, 2, 28));
        assert_eq!(end_of_month(d(2024, 12, 31)), d(2024, 12, 31));
    }

    #[test]
    fn period_forms_resolve_to_inclusive_day_bounds() {
        assert_eq!(
            parse_period("2024").unwrap(),
            (d(2024, 1, 1), d(2024, 12, 31))
        );
        assert_eq!(
            parse_period("2024-02").unwrap(),
            (d(2024, 2, 1), d(2024, 2, 29))
        );
        assert_eq!(
            parse_period("2024-02-10").unwrap(),
            (d(2024, 2, 10), d(2024, 2, 10))
        );
        assert!(parse_period("last week").is_err());
    }

    #[test]
    fn spans_join_start_and_end_periods() {
        assert_eq!(
            parse_span("2024-01:2024-03").unwrap(),
            (d(2024, 1, 1), d(2024, 3, 31))
        );
        assert_eq!(
            parse_span("2023:2024-02-10").unwrap(),
            (d(2023, 1, 1), d(2024, 2, 10))
        );
        assert!(parse_span("2024-03:2024-01").is_err());
    }

    #[test]
    fn days_in_range_is_inclusive_and_gap_free() {
        let days = days_in_range(d(2024, 1, 30), d(2024, 2, 2));
        assert_eq!(
            days,
            vec![d(2024, 1, 30), d(2024, 1, 31), d(2024, 2, 1), d(2024, 2, 2)]
        );
        assert_eq!(days_in_range(d(2024, 1, 1), d(2024, 1, 1)).len(), 1);
        assert!(days_in_range(d(2024, 1, 2), d(2024, 1, 1)).is_empty());
    }
}
