use chrono::NaiveDate;
use serde::Serialize;

/// One bar of the dashboard histogram: a calendar day and how many moments
/// were logged on it. Zero-count days are kept so a range renders gap-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: i64,
}
