//! Dashboard: per-day histogram plus trend summary for a selected range.

use crate::core::stats::StatsLogic;
use crate::errors::{AppError, AppResult};
use crate::models::day_count::DayCount;
use crate::utils::chart::render_bars;
use crate::utils::date::{
    end_of_day, end_of_month, end_of_week, start_of_day, start_of_month, start_of_week,
};
use crate::utils::formatting::bold;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::ValueEnum;
use rusqlite::Connection;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RangeKind {
    Day,
    Week,
    Month,
    Custom,
}

/// Resolve a user-facing range selection into inclusive timestamp bounds.
/// `anchor` positions day/week/month; `from`/`to` are only read for custom.
pub fn resolve_range(
    kind: RangeKind,
    anchor: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    week_start: Weekday,
) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    match kind {
        RangeKind::Day => Ok((start_of_day(anchor), end_of_day(anchor))),
        RangeKind::Week => Ok((
            start_of_day(start_of_week(anchor, week_start)),
            end_of_day(end_of_week(anchor, week_start)),
        )),
        RangeKind::Month => Ok((
            start_of_day(start_of_month(anchor)),
            end_of_day(end_of_month(anchor)),
        )),
        RangeKind::Custom => {
            let (f, t) = match (from, to) {
                (Some(f), Some(t)) => (f, t),
                _ => {
                    return Err(AppError::InvalidRange(
                        "custom range requires both --from and --to".to_string(),
                    ));
                }
            };
            if f > t {
                return Err(AppError::InvalidRange(format!(
                    "--from {} is after --to {}",
                    f, t
                )));
            }
            Ok((start_of_day(f), end_of_day(t)))
        }
    }
}

/// Totals derived from a histogram: overall count, daily average, peak day.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub total: i64,
    pub daily_average: f64,
    pub peak: Option<DayCount>,
}

pub fn summarize(data: &[DayCount]) -> TrendSummary {
    let total: i64 = data.iter().map(|d| d.count).sum();
    let daily_average = if data.is_empty() {
        0.0
    } else {
        total as f64 / data.len() as f64
    };
    let peak = data
        .iter()
        .filter(|d| d.count > 0)
        .max_by_key(|d| d.count)
        .cloned();

    TrendSummary {
        total,
        daily_average,
        peak,
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Build the full dashboard text for `[start, end]`.
    pub fn render(
        conn: &Connection,
        start: NaiveDateTime,
        end: NaiveDateTime,
        chart_width: usize,
    ) -> AppResult<String> {
        let data = StatsLogic::count_by_day(conn, start, end)?;
        let summary = summarize(&data);

        let mut out = String::new();
        out.push_str(&bold(&format!(
            "Moments from {} to {}\n\n",
            start.date(),
            end.date()
        )));
        out.push_str(&render_bars(&data, chart_width));
        out.push('\n');
        out.push_str(&format!("Total:         {}\n", summary.total));
        out.push_str(&format!("Daily average: {:.2}\n", summary.daily_average));
        match summary.peak {
            Some(peak) => out.push_str(&format!(
                "Peak day:      {} ({})\n",
                peak.day, peak.count
            )),
            None => out.push_str("Peak day:      --\n"),
        }

        Ok(out)
    }
}
